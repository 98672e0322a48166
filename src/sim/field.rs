//! Deterministic level layout
//!
//! Brick rows are laid out top-down in color groups: red only from level 2,
//! green only from level 1, blue always. Each group is 4 sub-rows of 10
//! bricks with a 2px gap on both axes, starting at the 5px left margin.

use glam::Vec2;

use super::rect::Rect;
use super::state::{BrickColor, Field, ObstacleKind};
use crate::consts::*;

impl Field {
    /// Build the full brick layout for a level (no paddle, no ball)
    pub fn level(level: u32) -> Self {
        let mut field = Self::new();
        let mut y = FIRST_ROW_Y;

        if level >= 2 {
            y = field.add_row_group(BrickColor::Red, y);
        }
        if level >= 1 {
            y = field.add_row_group(BrickColor::Green, y);
        }
        field.add_row_group(BrickColor::Blue, y);

        field
    }

    /// Start-screen backdrop: every color group, nothing in play
    pub fn showcase() -> Self {
        Self::level(SHOWCASE_LEVEL)
    }

    /// Lay one color group of `BRICK_SUB_ROWS` x `BRICK_COLS` bricks starting
    /// at center-y `y`, returning the y for the next group below.
    fn add_row_group(&mut self, color: BrickColor, mut y: f32) -> f32 {
        let size = Vec2::new(BRICK_WIDTH, BRICK_HEIGHT);
        let dx = BRICK_WIDTH + BRICK_GAP;

        for _ in 0..BRICK_SUB_ROWS {
            for col in 0..BRICK_COLS {
                let cx = BORDER + col as f32 * dx + BRICK_WIDTH / 2.0;
                self.add(
                    ObstacleKind::Brick(color),
                    Rect::from_center(Vec2::new(cx, y), size),
                );
            }
            y += BRICK_HEIGHT + BRICK_GAP;
        }
        y
    }

    /// Add the paddle at its fixed start position near the bottom edge
    pub fn add_paddle(&mut self, screen_height: f32) -> u32 {
        self.add(
            ObstacleKind::Paddle,
            Rect::from_center(
                Vec2::new(SCREEN_WIDTH / 2.0, screen_height - PADDLE_BOTTOM_OFFSET),
                Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_brick_counts() {
        assert_eq!(Field::level(0).brick_count(), 40);
        assert_eq!(Field::level(1).brick_count(), 80);
        assert_eq!(Field::level(2).brick_count(), 120);
        // Levels past 2 add nothing further
        assert_eq!(Field::level(7).brick_count(), 120);
    }

    #[test]
    fn test_showcase_has_all_groups_and_no_paddle() {
        let field = Field::showcase();
        assert_eq!(field.brick_count(), 120);
        assert!(field.paddle().is_none());
    }

    #[test]
    fn test_layout_margins_and_spacing() {
        let field = Field::level(0);
        let bricks: Vec<_> = field.iter().collect();

        // First brick sits flush against the left margin, topmost row at 72
        assert_eq!(bricks[0].rect.min.x, BORDER);
        assert_eq!(bricks[0].rect.center().y, FIRST_ROW_Y);

        // Horizontal pitch is brick width + gap
        let pitch = bricks[1].rect.min.x - bricks[0].rect.min.x;
        assert_eq!(pitch, BRICK_WIDTH + BRICK_GAP);

        // Vertical pitch between sub-rows likewise
        let row_pitch = bricks[BRICK_COLS as usize].rect.min.y - bricks[0].rect.min.y;
        assert_eq!(row_pitch, BRICK_HEIGHT + BRICK_GAP);
    }

    #[test]
    fn test_higher_levels_stack_above_blue() {
        // At level 2 the red group owns the top row; blue is pushed down
        // two group heights.
        let field = Field::level(2);
        let top = field
            .iter()
            .map(|o| o.rect.center().y)
            .fold(f32::INFINITY, f32::min);
        assert_eq!(top, FIRST_ROW_Y);

        let group_height = BRICK_SUB_ROWS as f32 * (BRICK_HEIGHT + BRICK_GAP);
        let blue_top = field
            .iter()
            .filter(|o| o.kind == ObstacleKind::Brick(BrickColor::Blue))
            .map(|o| o.rect.center().y)
            .fold(f32::INFINITY, f32::min);
        assert_eq!(blue_top, FIRST_ROW_Y + 2.0 * group_height);
    }

    #[test]
    fn test_layout_is_deterministic() {
        let a = Field::level(2);
        let b = Field::level(2);
        for (oa, ob) in a.iter().zip(b.iter()) {
            assert_eq!(oa.id, ob.id);
            assert_eq!(oa.kind, ob.kind);
            assert_eq!(oa.rect, ob.rect);
        }
    }
}
