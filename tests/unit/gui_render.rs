use super::*;

const RED: Color = Color::from_pixel(0xFF0000);

fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
    Rect { x, y, w, h }
}

#[test]
fn fill_rect_covers_exact_pixels() {
    let mut buf = vec![0u32; 10 * 10];
    let mut p = Painter::new(&mut buf, 10, 10, 1.0);
    p.fill_rect(rect(2.0, 3.0, 4.0, 2.0), RED);
    let painted: Vec<usize> = (0..100).filter(|&i| buf[i] == 0xFF0000).collect();
    assert_eq!(painted, vec![32, 33, 34, 35, 42, 43, 44, 45]);
}

#[test]
fn fill_rect_scales_to_physical_pixels() {
    let mut buf = vec![0u32; 8 * 8];
    let mut p = Painter::new(&mut buf, 8, 8, 2.0);
    p.fill_rect(rect(1.0, 1.0, 1.0, 1.0), RED);
    assert_eq!(buf.iter().filter(|&&px| px == 0xFF0000).count(), 4);
    assert_eq!(buf[2 * 8 + 2], 0xFF0000);
    assert_eq!(buf[3 * 8 + 3], 0xFF0000);
}

#[test]
fn fill_rect_clips_to_frame() {
    let mut buf = vec![0u32; 4 * 4];
    let mut p = Painter::new(&mut buf, 4, 4, 1.0);
    p.fill_rect(rect(-5.0, 2.0, 100.0, 100.0), RED);
    assert!(buf[..8].iter().all(|&px| px == 0));
    assert!(buf[8..].iter().all(|&px| px == 0xFF0000));
}

#[test]
fn clip_x_hides_content_left_of_strip() {
    let mut buf = vec![0u32; 10];
    let mut p = Painter::new(&mut buf, 10, 1, 1.0);
    p.fill_rect_clipped(rect(0.0, 0.0, 10.0, 1.0), 6.0, RED);
    assert_eq!(buf.iter().filter(|&&px| px == 0xFF0000).count(), 4);
    assert_eq!(buf[5], 0);
}

#[test]
fn empty_rect_paints_nothing() {
    let mut buf = vec![0u32; 16];
    let mut p = Painter::new(&mut buf, 4, 4, 1.0);
    p.fill_rect(rect(1.0, 1.0, 0.0, 3.0), RED);
    p.cross(rect(10.0, 10.0, 4.0, 4.0), 0.0, RED);
    assert!(buf.iter().all(|&px| px == 0));
}

#[test]
fn stroke_rect_leaves_interior() {
    let mut buf = vec![0u32; 5 * 5];
    let mut p = Painter::new(&mut buf, 5, 5, 1.0);
    p.stroke_rect(rect(0.0, 0.0, 5.0, 5.0), 1.0, 0.0, RED);
    assert_eq!(buf[2 * 5 + 2], 0);
    assert_eq!(buf[0], 0xFF0000);
    assert_eq!(buf[24], 0xFF0000);
    assert_eq!(buf.iter().filter(|&&px| px == 0xFF0000).count(), 16);
}

#[test]
fn lifted_tab_is_painted_over_its_neighbour() {
    use crate::core::{TabBar, TabBarConfig};

    let palette = crate::config::ThemeChoice::Dark.resolve();
    let mut bar = TabBar::new(TabBarConfig::default());
    let ids = bar.tabs().ids();
    bar.drag_start(ids[0]).unwrap();
    // Halfway over tab 2 without crossing its center.
    bar.drag_move(ids[0], 60.0).unwrap();

    let chrome = ChromeLayout::compute(&bar.config().metrics, 600.0, 100.0, 220.0, false);
    let (w, h) = (600usize, 100usize);
    let mut buf = vec![0u32; w * h];
    let mut painter = Painter::new(&mut buf, w, h, 1.0);
    paint_frame(&mut painter, &chrome, &bar.snapshot(), &palette, None);

    // Tab 2 rests at strip x 162..312; the lifted tab now covers 68..218 and its
    // right border sits at strip x 217.
    let y = 20;
    let x = (chrome.strip_x + 217.0) as usize;
    assert_eq!(buf[y * w + x], palette.lifted_tab_border.to_pixel());
    let inside = (chrome.strip_x + 180.0) as usize;
    assert_eq!(buf[y * w + inside], palette.selected_tab_bg.to_pixel());
}

#[test]
fn blend_mixes_by_coverage_and_respects_bounds() {
    let mut buf = vec![0u32; 4];
    let mut p = Painter::new(&mut buf, 2, 2, 1.0);
    let white = Color::from_pixel(0xFFFFFF);
    p.blend(0, 0, (0, 0, 1, 2), white, 255);
    p.blend(0, 1, (0, 0, 1, 2), white, 51);
    p.blend(1, 0, (0, 0, 1, 2), white, 255);
    p.blend(-1, 0, (0, 0, 1, 2), white, 255);
    assert_eq!(buf, vec![0xFFFFFF, 0, 0x333333, 0]);
}

#[test]
fn scrolled_strip_paints_trailing_tabs() {
    use crate::core::{TabBar, TabBarConfig};

    let palette = crate::config::ThemeChoice::Dark.resolve();
    let mut bar = TabBar::new(TabBarConfig {
        initial_tabs: 15,
        ..TabBarConfig::default()
    });
    let (w, h) = (720usize, 60usize);
    let chrome = ChromeLayout::compute(&bar.config().metrics, w as f32, h as f32, 220.0, false);
    bar.resize(Some(chrome.strip_width()));
    let snapshot = bar.snapshot();
    let scroll = super::super::chrome::clamp_scroll(
        f32::MAX,
        snapshot.content_width,
        chrome.strip_width(),
    );
    let chrome = chrome.scrolled(scroll);

    let mut buf = vec![0u32; w * h];
    let mut painter = Painter::new(&mut buf, w, h, 1.0);
    paint_frame(&mut painter, &chrome, &snapshot, &palette, None);

    // The last tab starts 10 px in and sits fully inside the window.
    let last = chrome.strip_to_window(snapshot.tabs[14].frame);
    assert!(last.right() <= w as f32);
    let x = (last.x + 10.0) as usize;
    assert_eq!(buf[20 * w + x], palette.tab_bg.to_pixel());
    // Scrolled-out content never bleeds over the sidebar toggle column.
    assert_eq!(buf[20 * w + 2], palette.bar_bg.to_pixel());
}

#[test]
fn titles_are_drawn_inside_their_label_area() {
    use crate::config::{FontConfig, load_font};
    use crate::core::{TabBar, TabBarConfig};

    let Some(font) = load_font(&FontConfig::default()) else {
        return;
    };
    let mut text = TextRenderer::new(font, 13.0);
    let palette = crate::config::ThemeChoice::Dark.resolve();
    let mut bar = TabBar::new(TabBarConfig {
        initial_tabs: 0,
        ..TabBarConfig::default()
    });
    bar.add_tab("WWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWW");
    let chrome = ChromeLayout::compute(&bar.config().metrics, 400.0, 60.0, 220.0, false);
    let snapshot = bar.snapshot();

    let (w, h) = (400usize, 60usize);
    let mut buf = vec![0u32; w * h];
    let mut painter = Painter::new(&mut buf, w, h, 1.0);
    paint_frame(&mut painter, &chrome, &snapshot, &palette, Some(&mut text));

    let tab = &snapshot.tabs[0];
    let label = chrome.strip_to_window(tab.title_rect);
    let frame = chrome.strip_to_window(tab.frame);
    let close = chrome.strip_to_window(tab.close_button);
    let bg = palette.selected_tab_bg.to_pixel();

    let inked = |x0: f32, x1: f32| {
        (frame.y as usize..((frame.y + frame.h) as usize).min(h))
            .flat_map(|y| (x0 as usize..x1 as usize).map(move |x| (x, y)))
            .filter(|&(x, y)| buf[y * w + x] != bg)
            .count()
    };
    assert!(inked(label.x, label.right()) > 0);
    // Between the shortened label and the close button the tab stays plain.
    assert_eq!(inked(label.right().ceil(), close.x.floor()), 0);
}
