use std::collections::BTreeMap;

use crate::core::TabId;
use crate::core::layout::SlotGeometry;

/// One neighbour-crossing decision for a single move event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// The trailing edge passed the resting center of the slot to the right.
    CrossRight(usize),
    /// The leading edge passed the resting center of the slot to the left.
    CrossLeft(usize),
    /// The most recent crossing was retreated past again.
    Backtrack(usize),
    Hold,
}

/// Ephemeral state of one pointer-drag gesture.
///
/// Slot indices here are positions at drag start. Neighbour offsets are
/// visual only; the model order is untouched until the session is committed
/// (except with [`super::DragStrategy::LiveSwap`], which never records offsets).
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub(crate) dragged_id: TabId,
    pub(crate) original_index: usize,
    pub(crate) current_insert_index: usize,
    pub(crate) displacement: f32,
    /// Width of the dragged tab in the current slot grid.
    pub(crate) dragged_width: f32,
    pub(crate) neighbor_offsets: BTreeMap<usize, f32>,
    pub(crate) shift_history: Vec<usize>,
}

impl DragSession {
    pub(crate) fn new(dragged_id: TabId, index: usize, dragged_width: f32) -> Self {
        Self {
            dragged_id,
            original_index: index,
            current_insert_index: index,
            displacement: 0.0,
            dragged_width,
            neighbor_offsets: BTreeMap::new(),
            shift_history: Vec::new(),
        }
    }

    pub fn dragged_id(&self) -> TabId {
        self.dragged_id
    }

    pub fn original_index(&self) -> usize {
        self.original_index
    }

    pub fn current_insert_index(&self) -> usize {
        self.current_insert_index
    }

    /// Cumulative pointer displacement since drag start.
    pub fn displacement(&self) -> f32 {
        self.displacement
    }

    /// Visual offset currently applied to the neighbour in slot `index`.
    pub fn neighbor_offset(&self, index: usize) -> f32 {
        self.neighbor_offsets.get(&index).copied().unwrap_or(0.0)
    }

    pub fn neighbor_offsets(&self) -> &BTreeMap<usize, f32> {
        &self.neighbor_offsets
    }

    /// Crossed neighbours, oldest first.
    pub fn shift_history(&self) -> &[usize] {
        &self.shift_history
    }

    /// Adopts a new tab width, keeping the direction of every neighbour offset.
    pub(crate) fn rescale(&mut self, width: f32) {
        self.dragged_width = width;
        for offset in self.neighbor_offsets.values_mut() {
            *offset = width.copysign(*offset);
        }
    }

    /// Leading/trailing edges of the dragged tab at its current displacement.
    pub(crate) fn edges(&self, geometry: &SlotGeometry) -> (f32, f32) {
        let leading = geometry.origin_x(self.original_index) + self.displacement;
        (leading, leading + self.dragged_width)
    }

    /// Decides at most one crossing for the current displacement.
    ///
    /// Thresholds are the neighbours' resting centers and the moving
    /// reference is the dragged tab's own edge, so a shifted neighbour never
    /// moves its own threshold. Right is checked before left.
    pub(crate) fn evaluate(&self, geometry: &SlotGeometry, tab_count: usize) -> Step {
        let (leading, trailing) = self.edges(geometry);
        let insert = self.current_insert_index;
        let origin = self.original_index;

        if insert >= origin {
            let right = insert + 1;
            if right < tab_count && trailing > geometry.center_x(right) {
                return Step::CrossRight(right);
            }
        }
        if insert <= origin && insert > 0 {
            let left = insert - 1;
            if leading < geometry.center_x(left) {
                return Step::CrossLeft(left);
            }
        }
        if let Some(&top) = self.shift_history.last() {
            let center = geometry.center_x(top);
            let retreated = if top > origin {
                trailing <= center
            } else {
                leading >= center
            };
            if retreated {
                return Step::Backtrack(top);
            }
        }
        Step::Hold
    }

    /// Applies a crossing to the session bookkeeping. `record_offsets` is false
    /// when the model is reordered live instead of shifting neighbours.
    ///
    /// Returns the insert index before the step.
    pub(crate) fn apply(&mut self, step: Step, record_offsets: bool) -> usize {
        let before = self.current_insert_index;
        match step {
            Step::CrossRight(neighbor) => {
                if record_offsets {
                    self.neighbor_offsets.insert(neighbor, -self.dragged_width);
                }
                self.shift_history.push(neighbor);
                self.current_insert_index = neighbor;
            }
            Step::CrossLeft(neighbor) => {
                if record_offsets {
                    self.neighbor_offsets.insert(neighbor, self.dragged_width);
                }
                self.shift_history.push(neighbor);
                self.current_insert_index = neighbor;
            }
            Step::Backtrack(neighbor) => {
                self.neighbor_offsets.remove(&neighbor);
                self.shift_history.pop();
                if neighbor > self.original_index {
                    self.current_insert_index -= 1;
                } else {
                    self.current_insert_index += 1;
                }
            }
            Step::Hold => {}
        }
        before
    }
}
