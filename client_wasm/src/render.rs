//! Canvas 2D drawing of both screens

use game_core::{Config, InstructionsView, RenderSnapshot, Side};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

const FOREGROUND: &str = "#ffffff";
const SCORE_FONT: &str = "48px sans-serif";
const TITLE_FONT: &str = "48px sans-serif";
const BODY_FONT: &str = "20px sans-serif";
const LINE_HEIGHT: f64 = 36.0;

pub fn draw_game(
    ctx: &CanvasRenderingContext2d,
    config: &Config,
    snapshot: &RenderSnapshot,
) -> Result<(), JsValue> {
    let width = config.field_width as f64;
    ctx.clear_rect(0.0, 0.0, width, config.field_height as f64);
    ctx.set_fill_style_str(FOREGROUND);
    ctx.set_text_align("left");

    // Score, centered at the top
    ctx.set_font(SCORE_FONT);
    let text = format!("{} : {}", snapshot.score.left, snapshot.score.right);
    let metrics = ctx.measure_text(&text)?;
    ctx.fill_text(&text, width / 2.0 - metrics.width() / 2.0, 50.0)?;

    let ball = config.ball_box(snapshot.ball);
    fill_box(ctx, ball.min.x, ball.min.y, config.ball_size, config.ball_size);

    for (side, height) in [
        (Side::Left, snapshot.left_paddle),
        (Side::Right, snapshot.right_paddle),
    ] {
        let paddle = config.paddle_box(side, height);
        fill_box(
            ctx,
            paddle.min.x,
            paddle.min.y,
            config.paddle_width,
            config.paddle_height,
        );
    }
    Ok(())
}

pub fn draw_instructions(
    ctx: &CanvasRenderingContext2d,
    config: &Config,
    view: &InstructionsView,
) -> Result<(), JsValue> {
    let width = config.field_width as f64;
    ctx.clear_rect(0.0, 0.0, width, config.field_height as f64);
    ctx.set_fill_style_str(FOREGROUND);
    ctx.set_text_align("center");

    let mut y = 80.0;
    for (i, line) in view.lines.iter().enumerate() {
        ctx.set_font(if i == 0 { TITLE_FONT } else { BODY_FONT });
        ctx.fill_text(line, width / 2.0, y)?;
        y += if i == 0 { LINE_HEIGHT * 1.5 } else { LINE_HEIGHT };
    }

    ctx.set_font(BODY_FONT);
    ctx.fill_text(&format!("[ {} ]", view.button), width / 2.0, y + LINE_HEIGHT)?;
    Ok(())
}

fn fill_box(ctx: &CanvasRenderingContext2d, x: f32, y: f32, w: f32, h: f32) {
    ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
}
