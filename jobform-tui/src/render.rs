//! Frame rendering for the form screen.
//!
//! Full-frame redraw: the form is small and fixed, so the renderer clears
//! the screen and repaints every line, then parks the terminal cursor inside
//! the focused text field.

use std::io::{self, Write};

use crossterm::{
    cursor::{self, MoveTo},
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use unicode_width::UnicodeWidthStr;

use jobform::{ErrorText, FeedbackKind, FormContext, TextField};

use crate::focus::{FocusSlot, FocusState};

const LABEL_WIDTH: usize = 14;
// marker (2 columns) + padded label
const VALUE_COL: u16 = 2 + LABEL_WIDTH as u16;

pub fn draw(ctx: &FormContext, focus: &FocusState) -> io::Result<()> {
    let mut out = io::stdout();
    let mut row: u16 = 0;
    let mut caret: Option<(u16, u16)> = None;

    queue!(out, cursor::Hide, Clear(ClearType::All))?;

    queue!(
        out,
        MoveTo(0, row),
        SetAttribute(Attribute::Bold),
        SetForegroundColor(Color::Cyan),
        Print("Job Application"),
        SetAttribute(Attribute::Reset),
        ResetColor,
    )?;
    row += 1;
    queue!(
        out,
        MoveTo(0, row),
        SetForegroundColor(Color::DarkGrey),
        Print("Tab moves focus · Space toggles · Ctrl+S submit · Ctrl+R reset · Ctrl+Q quit"),
        ResetColor,
    )?;
    row += 2;

    draw_text_field(
        &mut out,
        &mut row,
        "Full name",
        &ctx.full_name,
        ctx.name_error.as_ref(),
        focus.is_focused(FocusSlot::FullName),
        &mut caret,
    )?;
    draw_text_field(
        &mut out,
        &mut row,
        "Email",
        &ctx.email,
        ctx.email_error.as_ref(),
        focus.is_focused(FocusSlot::Email),
        &mut caret,
    )?;
    draw_text_field(
        &mut out,
        &mut row,
        "Phone",
        &ctx.phone,
        ctx.phone_error.as_ref(),
        focus.is_focused(FocusSlot::Phone),
        &mut caret,
    )?;
    draw_select(&mut out, &mut row, ctx, focus)?;
    draw_skills(&mut out, &mut row, ctx, focus)?;
    draw_text_field(
        &mut out,
        &mut row,
        "Cover letter",
        &ctx.cover_letter,
        ctx.cover_error.as_ref(),
        focus.is_focused(FocusSlot::CoverLetter),
        &mut caret,
    )?;

    row += 1;
    draw_buttons(&mut out, &mut row, focus)?;
    row += 1;
    draw_feedback(&mut out, &mut row, ctx)?;

    // Park the cursor inside the focused text field, if any.
    match caret {
        Some((col, caret_row)) => queue!(out, MoveTo(col, caret_row), cursor::Show)?,
        None => queue!(out, cursor::Hide)?,
    }

    out.flush()
}

fn draw_marker(out: &mut impl Write, focused: bool) -> io::Result<()> {
    if focused {
        queue!(
            out,
            SetForegroundColor(Color::Cyan),
            Print("> "),
            ResetColor
        )
    } else {
        queue!(out, Print("  "))
    }
}

fn draw_text_field(
    out: &mut impl Write,
    row: &mut u16,
    label: &str,
    field: &TextField,
    display: Option<&ErrorText>,
    focused: bool,
    caret: &mut Option<(u16, u16)>,
) -> io::Result<()> {
    queue!(out, MoveTo(0, *row))?;
    draw_marker(out, focused)?;
    queue!(out, Print(format!("{label:<LABEL_WIDTH$}")))?;

    let value = field.value();
    if value.is_empty() && !focused {
        queue!(
            out,
            SetForegroundColor(Color::DarkGrey),
            Print(field.placeholder()),
            ResetColor
        )?;
    } else {
        if field.has_error() {
            queue!(out, SetForegroundColor(Color::Red))?;
        }
        queue!(out, Print(&value), ResetColor)?;
    }

    if focused {
        let prefix = &value[..field.cursor().min(value.len())];
        *caret = Some((VALUE_COL + prefix.width() as u16, *row));
    }
    *row += 1;
    draw_error_line(out, row, display)
}

fn draw_select(
    out: &mut impl Write,
    row: &mut u16,
    ctx: &FormContext,
    focus: &FocusState,
) -> io::Result<()> {
    let focused = focus.is_focused(FocusSlot::Position);
    queue!(out, MoveTo(0, *row))?;
    draw_marker(out, focused)?;
    queue!(out, Print(format!("{:<LABEL_WIDTH$}", "Position")))?;

    match ctx.position.selected_label() {
        Some(label) => {
            if ctx.position.has_error() {
                queue!(out, SetForegroundColor(Color::Red))?;
            }
            queue!(out, Print(label), ResetColor)?;
        }
        None => {
            queue!(
                out,
                SetForegroundColor(Color::DarkGrey),
                Print(ctx.position.placeholder()),
                ResetColor
            )?;
        }
    }
    if focused {
        queue!(
            out,
            SetForegroundColor(Color::DarkGrey),
            Print("  (Up/Down to change)"),
            ResetColor
        )?;
    }
    *row += 1;
    draw_error_line(out, row, ctx.position_error.as_ref())
}

fn draw_skills(
    out: &mut impl Write,
    row: &mut u16,
    ctx: &FormContext,
    focus: &FocusState,
) -> io::Result<()> {
    queue!(out, MoveTo(0, *row), Print("  Skills"))?;
    *row += 1;

    let checked_char = ctx.skills.checked_char();
    let unchecked_char = ctx.skills.unchecked_char();
    for (idx, label) in ctx.skills.options().into_iter().enumerate() {
        queue!(out, MoveTo(2, *row))?;
        draw_marker(out, focus.is_focused(FocusSlot::Skill(idx)))?;
        let indicator = if ctx.skills.is_checked(idx) {
            checked_char
        } else {
            unchecked_char
        };
        queue!(out, Print(format!("{indicator} {label}")))?;
        *row += 1;
    }
    draw_error_line(out, row, ctx.skills_error.as_ref())
}

fn draw_buttons(out: &mut impl Write, row: &mut u16, focus: &FocusState) -> io::Result<()> {
    queue!(out, MoveTo(2, *row))?;
    draw_button(out, "[ Submit ]", focus.is_focused(FocusSlot::Submit))?;
    queue!(out, Print("  "))?;
    draw_button(out, "[ Reset ]", focus.is_focused(FocusSlot::Reset))?;
    *row += 1;
    Ok(())
}

fn draw_button(out: &mut impl Write, label: &str, focused: bool) -> io::Result<()> {
    if focused {
        queue!(
            out,
            SetAttribute(Attribute::Bold),
            SetForegroundColor(Color::Cyan),
            Print(label),
            SetAttribute(Attribute::Reset),
            ResetColor,
        )
    } else {
        queue!(out, Print(label))
    }
}

fn draw_feedback(out: &mut impl Write, row: &mut u16, ctx: &FormContext) -> io::Result<()> {
    let Some(feedback) = &ctx.feedback else {
        return Ok(());
    };
    let Some(kind) = feedback.kind() else {
        *row += 1;
        return Ok(());
    };
    let color = match kind {
        FeedbackKind::Success => Color::Green,
        FeedbackKind::Error => Color::Red,
    };
    queue!(
        out,
        MoveTo(2, *row),
        SetAttribute(Attribute::Bold),
        SetForegroundColor(color),
        Print(feedback.text()),
        SetAttribute(Attribute::Reset),
        ResetColor,
    )?;
    *row += 1;
    Ok(())
}

fn draw_error_line(
    out: &mut impl Write,
    row: &mut u16,
    display: Option<&ErrorText>,
) -> io::Result<()> {
    if let Some(display) = display
        && display.is_visible()
    {
        queue!(
            out,
            MoveTo(VALUE_COL, *row),
            SetForegroundColor(Color::Red),
            Print(display.text()),
            ResetColor,
        )?;
    }
    *row += 1;
    Ok(())
}
