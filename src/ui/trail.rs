use ratatui::{buffer::Buffer, layout::Rect};

use crate::effects::ParticleTrail;

pub fn render(buf: &mut Buffer, area: Rect, trail: &ParticleTrail) {
    for particle in trail.particles() {
        if particle.x < 0.0 || particle.y < 0.0 {
            continue;
        }
        let (x, y) = (particle.x.round() as u16, particle.y.round() as u16);
        if x >= area.right() || y >= area.bottom() {
            continue;
        }
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_symbol(particle.symbol()).set_fg(particle.color());
        }
    }
}
