use super::traits::DrawSurface;

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    SetSize { width: f32, height: f32 },
    ClearRect { x: f32, y: f32, width: f32, height: f32 },
    FillStyle(String),
    StrokeStyle(String),
    LineWidth(f32),
    Circle { x: f32, y: f32, radius: f32 },
    Line { x1: f32, y1: f32, x2: f32, y2: f32 },
}

/// A surface that records every call instead of drawing.
/// Resizing clears the recording, the same way resizing a canvas clears it.
#[derive(Debug, Default)]
pub struct CommandSurface {
    width: f32,
    height: f32,
    commands: Vec<DrawCommand>,
}

impl CommandSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::with_capacity(1024),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }

    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }

    /// Stroke styles in effect for each recorded line, in draw order.
    pub fn line_styles(&self) -> Vec<&str> {
        let mut style = "";
        let mut out = Vec::new();
        for cmd in &self.commands {
            match cmd {
                DrawCommand::StrokeStyle(s) => style = s.as_str(),
                DrawCommand::Line { .. } => out.push(style),
                _ => {}
            }
        }
        out
    }
}

impl DrawSurface for CommandSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.commands.clear();
        self.commands.push(DrawCommand::SetSize { width, height });
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(DrawCommand::ClearRect { x, y, width, height });
    }

    fn set_fill_style(&mut self, color: &str) {
        self.commands.push(DrawCommand::FillStyle(color.to_owned()));
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.commands.push(DrawCommand::StrokeStyle(color.to_owned()));
    }

    fn set_line_width(&mut self, width: f32) {
        self.commands.push(DrawCommand::LineWidth(width));
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32) {
        self.commands.push(DrawCommand::Circle { x, y, radius });
    }

    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.commands.push(DrawCommand::Line { x1, y1, x2, y2 });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_clears_recording() {
        let mut s = CommandSurface::new(10.0, 10.0);
        s.fill_circle(1.0, 1.0, 2.0);
        s.set_size(20.0, 30.0);
        assert_eq!(s.commands(), &[DrawCommand::SetSize { width: 20.0, height: 30.0 }]);
        assert_eq!(s.width(), 20.0);
        assert_eq!(s.height(), 30.0);
    }

    #[test]
    fn line_styles_track_stroke_state() {
        let mut s = CommandSurface::new(10.0, 10.0);
        s.set_stroke_style("a");
        s.stroke_line(0.0, 0.0, 1.0, 1.0);
        s.stroke_line(0.0, 0.0, 2.0, 2.0);
        s.set_stroke_style("b");
        s.stroke_line(0.0, 0.0, 3.0, 3.0);
        assert_eq!(s.line_styles(), vec!["a", "a", "b"]);
        assert_eq!(s.line_count(), 3);
    }
}
