use crate::layout::Primitive;

/// Target for drawing commands.
///
/// Primitives arrive in paint order; later ones cover earlier ones.
pub trait Canvas {
    fn draw(&mut self, primitive: &Primitive);

    fn draw_all<'a, I>(&mut self, primitives: I)
    where
        I: IntoIterator<Item = &'a Primitive>,
    {
        for primitive in primitives {
            self.draw(primitive);
        }
    }
}

impl Canvas for Vec<Primitive> {
    fn draw(&mut self, primitive: &Primitive) {
        self.push(primitive.clone());
    }
}
