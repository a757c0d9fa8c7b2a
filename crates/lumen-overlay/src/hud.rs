use lumen_engine::coords::{Rect, Vec2};
use lumen_engine::core::{App, AppControl, FrameCtx};
use lumen_engine::draw::DrawList;
use lumen_engine::draw::shapes::bezier::CubicBezier;
use lumen_engine::paint::{Color, LinearGradient};

const PANEL: Rect = Rect::new(50.0, 50.0, 400.0, 300.0);
const PANEL_RADIUS: f32 = 15.0;
const TITLE_HEIGHT: f32 = 40.0;
const INDICATORS: usize = 5;

const PANEL_FILL: Color = Color::new(0.15, 0.15, 0.2, 0.95);
const PANEL_BORDER: Color = Color::new(0.4, 0.8, 1.0, 1.0);
const TITLE_FROM: Color = Color::new(0.3, 0.6, 0.9, 1.0);
const TITLE_TO: Color = Color::new(0.2, 0.4, 0.7, 1.0);

/// Decorative heads-up display: a rounded panel with a gradient title bar,
/// an animated circle, a waving bezier, a few indicators and accent shapes.
pub struct Hud {
    alpha: f32,
    anti_alias: bool,
}

impl Hud {
    pub fn new(alpha: f32, anti_alias: bool) -> Self {
        Self { alpha, anti_alias }
    }

    /// Submits the whole HUD for animation time `t` (seconds).
    pub fn build(&self, draw: &mut DrawList, t: f32) {
        draw.set_global_alpha(self.alpha);
        draw.enable_anti_aliasing(self.anti_alias);

        let p = PANEL;
        let (x, y) = (p.origin.x, p.origin.y);
        let (w, h) = (p.size.x, p.size.y);

        draw.filled_rounded_rect(p, PANEL_RADIUS, PANEL_FILL);
        draw.rect_thick(p, 2.0, PANEL_BORDER);
        draw.gradient_rect(
            Rect::new(x, y, w, TITLE_HEIGHT),
            &LinearGradient::horizontal(TITLE_FROM, TITLE_TO),
        );

        // Pulsing circle with a ring.
        let center = Vec2::new(x + w / 2.0, y + 150.0);
        let radius = 30.0 + (t * 2.0).sin() * 10.0;
        draw.filled_circle(center, radius, 32, Color::new(1.0, 0.3, 0.3, 0.9));
        draw.circle(center, radius + 5.0, 32, Color::new(1.0, 1.0, 0.0, 1.0));

        // Waving curve under the title bar.
        let start = Vec2::new(x + 20.0, y + 80.0);
        let end = Vec2::new(x + w - 20.0, y + 80.0);
        let offset = t.sin() * 50.0;
        let curve = CubicBezier::new(
            start,
            Vec2::new(start.x + 100.0, start.y - 50.0 + offset),
            Vec2::new(end.x - 100.0, start.y + 50.0 - offset),
            end,
        );
        draw.bezier(&curve, 32, Color::new(0.0, 1.0, 1.0, 1.0));

        let base = y + h - 40.0;
        draw.thick_line(
            Vec2::new(x + 20.0, base),
            Vec2::new(x + w - 20.0, base),
            4.0,
            Color::new(0.2, 1.0, 0.2, 1.0),
        );

        let tri = Vec2::new(x + w - 80.0, y + h - 80.0);
        draw.filled_triangle(
            tri,
            Vec2::new(tri.x + 30.0, tri.y + 40.0),
            Vec2::new(tri.x - 30.0, tri.y + 40.0),
            Color::new(1.0, 0.5, 0.0, 0.8),
        );

        draw.filled_polygon(&badge(x, y + h), Color::new(0.8, 0.2, 0.8, 0.9));

        // Status lights in the title bar, phase-shifted left to right.
        for i in 0..INDICATORS {
            let c = Vec2::new(x + 20.0 + i as f32 * 30.0, y + 20.0);
            let brightness = ((t * 3.0 - i as f32 * 0.5).sin() + 1.0) * 0.5;
            draw.filled_circle(c, 8.0, 16, Color::rgb(0.2 + brightness * 0.8, 0.8, 0.2));
        }
    }
}

impl App for Hud {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.build(ctx.draw, ctx.elapsed.as_secs_f32());
        ctx.render(Color::transparent())
    }

    fn on_exit(&mut self) {
        log::info!("hud closed");
    }
}

/// Five-point badge near the panel's bottom-left corner; `bottom` is the panel's lower edge.
fn badge(left: f32, bottom: f32) -> [Vec2; 5] {
    [
        Vec2::new(left + 80.0, bottom - 30.0),
        Vec2::new(left + 100.0, bottom - 50.0),
        Vec2::new(left + 90.0, bottom - 70.0),
        Vec2::new(left + 70.0, bottom - 70.0),
        Vec2::new(left + 60.0, bottom - 50.0),
    ]
}
