//! Integration tests for decoding mouse reports read from a source.
//!
//! These tests drive [`MouseEvent::get`] the way an input dispatcher would: pull one raw
//! report, ask it questions, move on.

use curses_mouse::mask::{self, ButtonState};
use curses_mouse::{MouseError, MouseEvent, MouseSource, RawMouseState, Result, ScriptedSource};

fn raw(x: i32, y: i32, state: ButtonState) -> RawMouseState {
    RawMouseState::new(x, y, state.bits())
}

/// A click-then-scroll sequence decodes report by report.
#[test]
fn test_dispatch_sequence() -> Result<()> {
    let mut source = ScriptedSource::new()
        .with(raw(10, 5, ButtonState::BUTTON1_PRESSED))
        .with(raw(10, 5, ButtonState::BUTTON1_RELEASED))
        .with(raw(10, 5, ButtonState::BUTTON1_CLICKED))
        .with(raw(10, 6, ButtonState::BUTTON4_PRESSED));

    let press = MouseEvent::get(&mut source)?;
    assert!(press.pressed(1));
    assert_eq!(press.wheel_direction(), 0);

    let release = MouseEvent::get(&mut source)?;
    assert!(release.released(1));
    assert!(!release.pressed(1));

    let click = MouseEvent::get(&mut source)?;
    assert!(click.clicked(1));
    assert!(!click.double_clicked(1));

    let wheel = MouseEvent::get(&mut source)?;
    assert_eq!(wheel.y(), 6);
    assert_eq!(wheel.wheel_direction(), -1);

    assert!(matches!(
        MouseEvent::get(&mut source),
        Err(MouseError::NoEvent)
    ));

    Ok(())
}

/// A dispatcher that doesn't know how many buttons exist can scan a wide range.
#[test]
fn test_speculative_button_scan() -> Result<()> {
    let mut source = ScriptedSource::from(vec![raw(0, 0, ButtonState::BUTTON3_DOUBLE_CLICKED)]);
    let event = MouseEvent::get(&mut source)?;

    let hits: Vec<i32> = (-2..=8).filter(|&n| event.double_clicked(n)).collect();
    assert_eq!(hits, vec![3]);

    Ok(())
}

/// Coordinates past the one-byte wrap come back in range.
#[test]
fn test_wide_terminal_coordinates() -> Result<()> {
    let mut source: ScriptedSource = [(-35, 40), (219, -1), (-255, 0)]
        .into_iter()
        .map(|(x, y)| RawMouseState::new(x, y, 0))
        .collect();

    let mut corrected = Vec::new();
    while !source.is_empty() {
        let event = MouseEvent::get(&mut source)?;
        corrected.push((event.x(), event.y()));
    }

    assert_eq!(corrected, vec![(220, 40), (219, 254), (0, 0)]);

    Ok(())
}

/// The id and z fields of a report do not influence decoding.
#[test]
fn test_id_and_z_are_ignored() {
    let state = ButtonState::BUTTON2_CLICKED.bits();
    let a = MouseEvent::from(RawMouseState::from((0, 7, 8, 0, state)));
    let b = MouseEvent::from(RawMouseState::from((3, 7, 8, 42, state)));

    assert_eq!(a, b);
}

/// Modifier queries read only their own bit.
#[test]
fn test_modifier_combinations() {
    let modifiers = [
        ButtonState::BUTTON_CTRL,
        ButtonState::BUTTON_ALT,
        ButtonState::BUTTON_SHIFT,
    ];

    for bits in 0..8u8 {
        let mut state = ButtonState::BUTTON1_CLICKED;
        for (i, flag) in modifiers.iter().enumerate() {
            if bits & (1 << i) != 0 {
                state |= *flag;
            }
        }
        let event = MouseEvent::new(raw(0, 0, state));

        assert_eq!(event.ctrl(), bits & 0b001 != 0);
        assert_eq!(event.alt(), bits & 0b010 != 0);
        assert_eq!(event.shift(), bits & 0b100 != 0);
        assert!(event.clicked(1));
    }
}

/// Every table entry answers only its own query.
#[test]
fn test_tables_agree_with_queries() {
    type Query = fn(&MouseEvent, i32) -> bool;
    let tables: [(&[ButtonState], Query); 4] = [
        (&mask::PRESSED, MouseEvent::pressed),
        (&mask::RELEASED, MouseEvent::released),
        (&mask::CLICKED, MouseEvent::clicked),
        (&mask::DOUBLE_CLICKED, MouseEvent::double_clicked),
    ];

    for (table, _) in &tables {
        for (n, flag) in table.iter().enumerate().skip(1) {
            let event = MouseEvent::new(raw(0, 0, *flag));
            let n = i32::try_from(n).unwrap();

            let answers: Vec<bool> = tables.iter().map(|(_, query)| query(&event, n)).collect();
            assert_eq!(answers.iter().filter(|&&hit| hit).count(), 1);
        }
    }
}

/// A source held behind a trait object works with `MouseEvent::get`.
#[test]
fn test_dyn_source() -> Result<()> {
    let mut scripted = ScriptedSource::from(vec![raw(1, 2, ButtonState::BUTTON_SHIFT)]);
    let source: &mut dyn MouseSource = &mut scripted;

    let event = MouseEvent::get(source)?;
    assert!(event.shift());

    Ok(())
}
