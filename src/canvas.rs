/// Linear RGB color
pub type Color = [f32; 3];

/// Minimal stateful 2D drawing surface, the boundary between the simulation
/// and whatever actually rasterizes it.
///
/// Fill and stroke color, global alpha, and line width are sticky state;
/// `fill_circle` and `draw_line` consume whatever was set last. Positions
/// are in pixels with the origin at the top-left corner.
pub trait Canvas {
    /// Discard everything drawn so far this frame
    fn clear(&mut self);

    fn set_fill_color(&mut self, color: Color);

    fn set_stroke_color(&mut self, color: Color);

    /// Alpha applied to all subsequent draws, in [0, 1]
    fn set_global_alpha(&mut self, alpha: f32);

    /// Stroke width in pixels for subsequent lines
    fn set_line_width(&mut self, width: f32);

    /// Filled circle using the current fill color and global alpha
    fn fill_circle(&mut self, center: (f32, f32), radius: f32);

    /// Line segment using the current stroke color, line width, and global alpha
    fn draw_line(&mut self, from: (f32, f32), to: (f32, f32));
}
