// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive a two-section layout (a menu column and a 3×3 card grid) with
//! simulated arrow keys and print every step the engine takes.
//!
//! Run with:
//!   `cargo run -p waypoint_demos --example grid_navigation`

use kurbo::Rect;
use waypoint_demos::SimHost;
use waypoint_engine::{ConfigPatch, Engine, EnterTo, KeyCode, Modifiers, Restrict};
use waypoint_geometry::Direction;

fn keyname(key: KeyCode) -> &'static str {
    match key {
        KeyCode::ArrowLeft => "Left",
        KeyCode::ArrowUp => "Up",
        KeyCode::ArrowRight => "Right",
        KeyCode::ArrowDown => "Down",
        KeyCode::Enter => "Enter",
    }
}

fn main() {
    let mut host = SimHost::new();

    // A menu column on the left…
    for row in 0..3 {
        let y = f64::from(row) * 40.0;
        host.add(&["menu-item"], Rect::new(0.0, y, 80.0, y + 30.0));
    }
    // …and a 3×3 card grid to its right.
    for row in 0..3 {
        for col in 0..3 {
            let x = 120.0 + f64::from(col) * 60.0;
            let y = f64::from(row) * 60.0;
            host.add(&["card"], Rect::new(x, y, x + 50.0, y + 50.0));
        }
    }

    let mut engine: Engine<SimHost> = Engine::new();
    engine
        .add_section(Some("menu"), ConfigPatch::new().selector("menu-item"))
        .expect("fresh id");
    engine
        .add_section(
            Some("grid"),
            ConfigPatch::new()
                .selector("card")
                .enter_to(EnterTo::LastFocused)
                .restrict(Restrict::SelfFirst),
        )
        .expect("fresh id");
    engine.set_default_section(Some("menu")).expect("menu exists");

    // A first key press with nothing focused enters the default section.
    let script = [
        KeyCode::ArrowDown,
        KeyCode::ArrowDown,
        KeyCode::ArrowRight, // crosses into the grid
        KeyCode::ArrowRight,
        KeyCode::ArrowUp,
        KeyCode::Enter,
        KeyCode::ArrowLeft, // back toward the menu
        KeyCode::ArrowLeft,
    ];

    for key in script {
        let consumed = engine.on_key_down(&mut host, key, Modifiers::empty());
        if key == KeyCode::Enter {
            engine.on_key_up(&mut host, key, Modifiers::empty());
        }
        println!(
            "{:<6} consumed={:<5} focused={:?}",
            keyname(key),
            consumed,
            host.focused()
        );
        for entry in host.take_log() {
            println!("        {entry}");
        }
    }

    // Moves can also be driven programmatically, without key events.
    let moved = engine.move_focus(&mut host, Direction::Down, None);
    println!(
        "api Down moved={moved} focused={:?}",
        host.focused()
    );
    for entry in host.take_log() {
        println!("        {entry}");
    }

    println!("last section: {:?}", engine.last_section());
}
