use super::messages::Message;
use super::state::PARTICLE_COLOR;
use crate::particles::ParticleField;
use iced::widget::canvas::{self, Frame, Geometry, Path};
use iced::{Point, Rectangle, Renderer, Theme, mouse};

/// Canvas program drawing the hero particle field.
pub(super) struct ParticleLayer<'a> {
    pub(super) field: &'a ParticleField,
}

impl canvas::Program<Message> for ParticleLayer<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        for particle in self.field.particles() {
            let dot = Path::circle(Point::new(particle.x, particle.y), particle.size);
            frame.fill(&dot, PARTICLE_COLOR);
        }
        vec![frame.into_geometry()]
    }
}
