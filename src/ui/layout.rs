// SPDX-License-Identifier: MPL-2.0
//! Direction- and width-aware layout helpers.
//!
//! iced lays rows out left to right. For right-to-left locales the children
//! of a row are reversed so the first item sits on the right, and text is
//! aligned to the right edge. Below the compact breakpoint multi-column rows
//! collapse into centered columns.

use crate::locale::Direction;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Column, Row};
use iced::{Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub direction: Direction,
    pub compact: bool,
}

impl Layout {
    /// Layout for a window `width` logical pixels wide.
    #[must_use]
    pub fn new(direction: Direction, width: f32, compact_width: f32) -> Self {
        Self {
            direction,
            compact: width < compact_width,
        }
    }

    /// Alignment of body text and of the items in a section column.
    #[must_use]
    pub fn text_align(self) -> Horizontal {
        if self.compact {
            Horizontal::Center
        } else {
            self.start()
        }
    }

    /// Edge where reading starts.
    #[must_use]
    pub fn start(self) -> Horizontal {
        match self.direction {
            Direction::Rtl => Horizontal::Right,
            Direction::Ltr => Horizontal::Left,
        }
    }

    /// Edge where reading ends.
    #[must_use]
    pub fn end(self) -> Horizontal {
        match self.direction {
            Direction::Rtl => Horizontal::Left,
            Direction::Ltr => Horizontal::Right,
        }
    }

    /// Puts `items` in visual left-to-right order.
    #[must_use]
    pub fn ordered<T>(self, mut items: Vec<T>) -> Vec<T> {
        if self.direction.is_rtl() {
            items.reverse();
        }
        items
    }

    /// A row whose first child appears on the reading-start side.
    pub fn row<'a, M: 'a>(self, children: Vec<Element<'a, M>>) -> Row<'a, M> {
        Row::with_children(self.ordered(children)).align_y(Vertical::Center)
    }

    /// Two or more blocks side by side, or stacked and centered in compact
    /// mode.
    pub fn flow<'a, M: 'a>(self, children: Vec<Element<'a, M>>, spacing: f32) -> Element<'a, M> {
        if self.compact {
            Column::with_children(children)
                .spacing(spacing)
                .align_x(Horizontal::Center)
                .width(Length::Fill)
                .into()
        } else {
            self.row(children)
                .spacing(spacing)
                .width(Length::Fill)
                .into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_below_breakpoint_only() {
        assert!(Layout::new(Direction::Ltr, 767.0, 768.0).compact);
        assert!(!Layout::new(Direction::Ltr, 768.0, 768.0).compact);
    }

    #[test]
    fn rtl_reverses_item_order() {
        let rtl = Layout::new(Direction::Rtl, 1200.0, 768.0);
        let ltr = Layout::new(Direction::Ltr, 1200.0, 768.0);
        assert_eq!(rtl.ordered(vec![1, 2, 3]), vec![3, 2, 1]);
        assert_eq!(ltr.ordered(vec![1, 2, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn text_alignment_follows_direction_unless_compact() {
        let wide_rtl = Layout::new(Direction::Rtl, 1200.0, 768.0);
        let wide_ltr = Layout::new(Direction::Ltr, 1200.0, 768.0);
        let narrow_rtl = Layout::new(Direction::Rtl, 400.0, 768.0);
        assert_eq!(wide_rtl.text_align(), Horizontal::Right);
        assert_eq!(wide_ltr.text_align(), Horizontal::Left);
        assert_eq!(narrow_rtl.text_align(), Horizontal::Center);
        assert_eq!(wide_rtl.end(), Horizontal::Left);
    }
}
