//! The job-application form app.
//!
//! Owns the form context, the tab-order focus state, and the deferred task
//! queue. Each loop turn reads one terminal event, translates it into form
//! operations, then drains deferred work and applies any focus requests the
//! form layer raised, all strictly before the next event is polled.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, info};

use jobform::form::{live, submit};
use jobform::{DeferredQueue, FieldEvent, FieldId, FormContext, TextField};

use crate::error::RuntimeError;
use crate::focus::{FocusSlot, FocusState};
use crate::render;
use crate::terminal::TerminalGuard;

pub const POSITIONS: [&str; 4] = [
    "Frontend Developer",
    "Backend Developer",
    "Full-Stack Developer",
    "DevOps Engineer",
];

pub const SKILLS: [&str; 5] = ["Rust", "TypeScript", "SQL", "Docker", "Kubernetes"];

pub struct App {
    ctx: FormContext,
    focus: FocusState,
    tasks: DeferredQueue,
    running: bool,
}

impl App {
    pub fn new() -> Self {
        let ctx = FormContext::new();
        ctx.full_name.set_placeholder("Jane Doe");
        ctx.email.set_placeholder("jane@example.com");
        ctx.phone.set_placeholder("123-456-7890");
        ctx.position.set_placeholder("Select a position");
        ctx.position.set_options(POSITIONS.to_vec());
        ctx.skills.set_options(SKILLS.to_vec());
        ctx.cover_letter
            .set_placeholder("Tell us why you want the role");
        ctx.take_dirty();

        Self {
            ctx,
            focus: FocusState::new(SKILLS.len()),
            tasks: DeferredQueue::new(),
            running: true,
        }
    }

    pub fn run(&mut self) -> Result<(), RuntimeError> {
        let _guard = TerminalGuard::new()?;
        info!("form runtime started");
        render::draw(&self.ctx, &self.focus)?;

        while self.running {
            let ev = event::read()?;
            let handled = self.handle_event(ev);

            // End of turn: deferred work runs after the event's own handling
            // and before the next poll.
            let deferred_ran = self.tasks.drain() > 0;
            let focus_moved = self.apply_focus_requests();
            let dirty = self.ctx.take_dirty();

            if handled || deferred_ran || focus_moved || dirty {
                render::draw(&self.ctx, &self.focus)?;
            }
        }

        info!("form runtime stopped");
        Ok(())
    }

    fn handle_event(&mut self, ev: Event) -> bool {
        match ev {
            Event::Key(key) => self.handle_key(key),
            // The next draw recomputes everything from scratch anyway.
            Event::Resize(_, _) => true,
            _ => false,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('s') => {
                    self.submit();
                    return true;
                }
                KeyCode::Char('r') => {
                    self.reset();
                    return true;
                }
                KeyCode::Char('q') | KeyCode::Char('c') => {
                    debug!("quit requested");
                    self.running = false;
                    return true;
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Tab => {
                self.move_focus(true);
                true
            }
            KeyCode::BackTab => {
                self.move_focus(false);
                true
            }
            code => self.dispatch_to_focused(code),
        }
    }

    /// Cycle focus; leaving a text field counts as its blur.
    fn move_focus(&mut self, forward: bool) {
        let left = if forward {
            self.focus.next()
        } else {
            self.focus.prev()
        };
        if let Some(field) = left.blurs() {
            live::on_field_event(&self.ctx, FieldEvent::Blur(field));
        }
    }

    fn dispatch_to_focused(&mut self, code: KeyCode) -> bool {
        match self.focus.current() {
            FocusSlot::FullName => self.text_field_key(self.ctx.full_name.clone(), code, true),
            FocusSlot::Email => self.text_field_key(self.ctx.email.clone(), code, true),
            FocusSlot::Phone => self.text_field_key(self.ctx.phone.clone(), code, true),
            // The cover letter swallows Enter instead of submitting.
            FocusSlot::CoverLetter => {
                self.text_field_key(self.ctx.cover_letter.clone(), code, false)
            }
            FocusSlot::Position => self.select_key(code),
            FocusSlot::Skill(idx) => self.skill_key(idx, code),
            FocusSlot::Submit => self.button_key(code, true),
            FocusSlot::Reset => self.button_key(code, false),
        }
    }

    fn text_field_key(&mut self, field: TextField, code: KeyCode, enter_submits: bool) -> bool {
        match code {
            KeyCode::Enter => {
                if enter_submits {
                    self.submit();
                }
                enter_submits
            }
            KeyCode::Char(c) => {
                field.insert_char(c);
                true
            }
            KeyCode::Backspace => {
                field.delete_char_before();
                true
            }
            KeyCode::Delete => {
                field.delete_char_at();
                true
            }
            KeyCode::Left => {
                field.cursor_left();
                true
            }
            KeyCode::Right => {
                field.cursor_right();
                true
            }
            KeyCode::Home => {
                field.cursor_home();
                true
            }
            KeyCode::End => {
                field.cursor_end();
                true
            }
            _ => false,
        }
    }

    fn select_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Up => {
                self.ctx.position.select_prev();
                live::on_field_event(&self.ctx, FieldEvent::Changed(FieldId::Position));
                true
            }
            KeyCode::Down => {
                self.ctx.position.select_next();
                live::on_field_event(&self.ctx, FieldEvent::Changed(FieldId::Position));
                true
            }
            KeyCode::Enter => {
                self.submit();
                true
            }
            _ => false,
        }
    }

    fn skill_key(&mut self, idx: usize, code: KeyCode) -> bool {
        match code {
            KeyCode::Char(' ') => {
                self.ctx.skills.toggle(idx);
                live::on_field_event(&self.ctx, FieldEvent::Changed(FieldId::Skills));
                true
            }
            KeyCode::Enter => {
                self.submit();
                true
            }
            _ => false,
        }
    }

    fn button_key(&mut self, code: KeyCode, is_submit: bool) -> bool {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                if is_submit {
                    self.submit();
                } else {
                    self.reset();
                }
                true
            }
            _ => false,
        }
    }

    fn submit(&mut self) {
        info!("submit intent");
        submit::handle_submit(&self.ctx);
    }

    fn reset(&mut self) {
        info!("reset intent");
        // Phase 1: the host clears field values.
        self.ctx.reset_values();
        // Phase 2: error/feedback cleanup, deferred to the end of this turn.
        submit::handle_reset(&self.ctx, &self.tasks);
    }

    /// Apply focus requests raised by the form layer; returns whether the
    /// focused slot changed.
    fn apply_focus_requests(&mut self) -> bool {
        let before = self.focus.current();

        if self.ctx.full_name.take_focus_request() {
            self.focus.set(FocusSlot::FullName);
        }
        if self.ctx.email.take_focus_request() {
            self.focus.set(FocusSlot::Email);
        }
        if self.ctx.phone.take_focus_request() {
            self.focus.set(FocusSlot::Phone);
        }
        if self.ctx.position.take_focus_request() {
            self.focus.set(FocusSlot::Position);
        }
        if self.ctx.skills.take_focus_request() {
            self.focus.set(FocusSlot::Skill(0));
        }
        if self.ctx.cover_letter.take_focus_request() {
            self.focus.set(FocusSlot::CoverLetter);
        }
        if let Some(feedback) = &self.ctx.feedback
            && feedback.take_focus_request()
        {
            // The feedback region is not a tab stop here; the announcement
            // itself is the observable effect, so the request is consumed
            // without moving focus.
            debug!("feedback focus request observed");
        }

        self.focus.current() != before
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
