// SPDX-License-Identifier: MPL-2.0
//! Messages, timer and position dots shared by the rotator-backed sections.

use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::state::Rotator;
use crate::ui::styles;
use iced::widget::{button, Row, Space};
use iced::{time, Element, Length, Subscription};

/// Messages emitted by a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The auto-advance timer fired.
    Tick,
    /// The user picked an item (dot or thumbnail).
    Select(usize),
}

/// Applies a carousel message to its rotator.
pub fn update<T>(rotator: &mut Rotator<T>, message: Message) {
    match message {
        Message::Tick => {
            rotator.advance();
            tracing::trace!(index = rotator.current_index(), "carousel advanced");
        }
        Message::Select(index) => {
            if !rotator.select_index(index) {
                tracing::debug!(index, len = rotator.len(), "ignoring out-of-range selection");
            }
        }
    }
}

/// Auto-advance timer of a rotator mounted as `mount_id`.
///
/// The timer only exists while this subscription is returned; dropping it
/// from the application's subscription set cancels it. A new `mount_id`
/// yields a new timer even when the interval is unchanged.
pub fn subscription<T>(rotator: &Rotator<T>, mount_id: u64) -> Subscription<Message> {
    time::every(rotator.interval())
        .with(mount_id)
        .map(|(_, _)| Message::Tick)
}

/// One pill per item; the active one is wider and colored.
pub fn dots<'a, T>(rotator: &Rotator<T>) -> Element<'a, Message> {
    let dots = rotator.iter_marked().map(|(index, _, active)| {
        let width = if active {
            sizing::DOT_ACTIVE_WIDTH
        } else {
            sizing::DOT
        };
        button(Space::new().width(Length::Fixed(width)).height(Length::Fixed(sizing::DOT)))
            .padding(0)
            .style(styles::button::dot(active))
            .on_press(Message::Select(index))
            .into()
    });

    Row::with_children(dots).spacing(spacing::XS).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn testimonials() -> Rotator<&'static str> {
        Rotator::new(vec!["a", "b", "c"], Duration::from_millis(6000)).expect("non-empty")
    }

    #[test]
    fn tick_advances_and_wraps() {
        let mut rotator = testimonials();
        for _ in 0..4 {
            update(&mut rotator, Message::Tick);
        }
        assert_eq!(rotator.current_index(), 1);
    }

    #[test]
    fn select_then_tick_continues_from_selection() {
        let mut rotator = testimonials();
        update(&mut rotator, Message::Select(2));
        update(&mut rotator, Message::Tick);
        assert_eq!(rotator.current_index(), 0);
    }

    #[test]
    fn invalid_select_is_ignored() {
        let mut rotator = testimonials();
        update(&mut rotator, Message::Select(1));
        update(&mut rotator, Message::Select(7));
        assert_eq!(rotator.current_index(), 1);
    }

    #[test]
    fn dots_render_for_any_position() {
        let mut rotator = testimonials();
        for index in 0..3 {
            rotator.select_index(index);
            let _element: Element<'_, Message> = dots(&rotator);
        }
    }
}
