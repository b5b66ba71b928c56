use raylib::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl IRect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn contains(&self, point: Vector2) -> bool {
        point.x >= self.x as f32
            && point.x <= (self.x + self.w) as f32
            && point.y >= self.y as f32
            && point.y <= (self.y + self.h) as f32
    }
}

/// Vertical list of dataset names in the top-left corner. One entry per
/// blend slot; the selected one is highlighted.
pub struct DatasetList {
    names: Vec<String>,
    rects: Vec<IRect>,
    selected: usize,
}

impl DatasetList {
    pub const FONT: i32 = 20;
    const PAD: i32 = 6;
    const MARGIN: i32 = 10;
    const GAP: i32 = 4;

    /// Lays the entries out given each name's text width in pixels.
    pub fn new(names: Vec<String>, text_widths: &[i32]) -> Self {
        let w = text_widths.iter().copied().max().unwrap_or(0) + Self::PAD * 2;
        let h = Self::FONT + Self::PAD * 2;
        let rects = (0..names.len() as i32)
            .map(|i| IRect::new(Self::MARGIN, Self::MARGIN + i * (h + Self::GAP), w, h))
            .collect();
        Self {
            names,
            rects,
            selected: 0,
        }
    }

    #[inline]
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn set_selected(&mut self, index: usize) {
        if index < self.names.len() {
            self.selected = index;
        }
    }

    /// Entry under `point`, if any.
    pub fn hit(&self, point: Vector2) -> Option<usize> {
        self.rects.iter().position(|r| r.contains(point))
    }

    /// Bounding box of every entry; pointer input here belongs to the list.
    pub fn bounds(&self) -> Option<IRect> {
        let first = self.rects.first()?;
        let last = self.rects.last()?;
        Some(IRect::new(first.x, first.y, first.w, last.y + last.h - first.y))
    }

    /// Maps a digit key (1-based) to an entry index.
    pub fn index_for_digit(&self, digit: u32) -> Option<usize> {
        let idx = (digit as usize).checked_sub(1)?;
        (idx < self.names.len()).then_some(idx)
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        for (i, (name, r)) in self.names.iter().zip(&self.rects).enumerate() {
            let (bg, fg) = if i == self.selected {
                (Color::new(255, 255, 255, 220), Color::BLACK)
            } else {
                (Color::new(0, 0, 0, 140), Color::new(220, 220, 220, 255))
            };
            d.draw_rectangle(r.x, r.y, r.w, r.h, bg);
            d.draw_rectangle_lines(r.x, r.y, r.w, r.h, Color::new(255, 255, 255, 90));
            d.draw_text(name, r.x + Self::PAD, r.y + Self::PAD, Self::FONT, fg);
        }
    }
}
