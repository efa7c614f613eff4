use tui_orrery::core::{Scene, SceneConfig, HINTS, PLANETS, SUN};
use tui_orrery::term::Canvas;
use tui_orrery::types::{Color, SceneAction};

fn canvas() -> Canvas {
    // 158 x 96 px, the size of an 80x24 terminal.
    Canvas::for_terminal(80, 24).unwrap()
}

#[test]
fn sun_is_a_filled_disc_at_the_centre() {
    let scene = Scene::default();
    let mut c = canvas();
    scene.draw(&mut c);

    let (cx, cy) = (c.width() / 2, c.height() / 2);
    assert!(c.is_set(cx, cy));
    assert!(c.is_set(cx + SUN.radius as usize, cy));
    assert!(c.is_set(cx + 5, cy + 5));
    let centre = c.cell(cx / 2, cy / 4).unwrap();
    assert_eq!(centre.fg, SUN.color);
}

#[test]
fn planets_start_at_their_orbit_distance() {
    let scene = Scene::default();
    let mut c = canvas();
    scene.draw(&mut c);

    let (cx, cy) = (c.width() / 2, c.height() / 2);
    // Mercury and Venus fit inside a 158x96 canvas at time zero.
    for planet in &PLANETS[..2] {
        let x = cx + planet.distance as usize;
        assert!(c.is_set(x, cy), "{} missing", planet.name);
        assert_eq!(c.cell(x / 2, cy / 4).unwrap().fg, planet.color);
    }
}

#[test]
fn orbit_outlines_follow_the_toggle() {
    let mut scene = Scene::default();
    let mut c = canvas();
    let (cx, cy) = (c.width() / 2, c.height() / 2);
    // Top of Mercury's orbit, away from every body at time zero.
    let (ox, oy) = (cx, cy - PLANETS[0].distance as usize);

    scene.draw(&mut c);
    assert!(c.is_set(ox, oy));

    scene.apply_action(SceneAction::ToggleOrbits);
    c.clear();
    scene.draw(&mut c);
    assert!(!c.is_set(ox, oy));
}

#[test]
fn hints_render_as_text_overlay() {
    let mut scene = Scene::new(SceneConfig {
        hints: true,
        ..SceneConfig::default()
    });
    let mut c = canvas();
    scene.draw(&mut c);

    let row: String = (0..HINTS.len()).map(|col| c.cell(col, 0).unwrap().glyph()).collect();
    assert_eq!(row, HINTS);
    assert_eq!(c.cell(0, 0).unwrap().fg, Color::White);

    scene.apply_action(SceneAction::ToggleHints);
    c.clear();
    scene.draw(&mut c);
    assert!(c.cells().iter().all(|cell| cell.text.is_none()));
}

#[test]
fn draw_is_deterministic_per_seed() {
    let mut a = Scene::default();
    let mut b = Scene::default();
    for _ in 0..25 {
        a.advance();
        b.advance();
    }
    let (mut ca, mut cb) = (canvas(), canvas());
    a.draw(&mut ca);
    b.draw(&mut cb);
    assert_eq!(ca.frame("\n"), cb.frame("\n"));
}

#[test]
fn draw_survives_tiny_terminals() {
    let scene = Scene::default();
    let mut c = Canvas::for_terminal(1, 1).unwrap();
    scene.draw(&mut c);
    assert_eq!(c.frame("\n"), "\n");
}
