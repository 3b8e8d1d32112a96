use super::Canvas;
use std::io::Write;

/// Sentinel that never matches a real color, forcing the first escape of a row.
const NO_COLOR: (u8, u8, u8) = (255, 255, 254);

/// Writes a canvas to the terminal as truecolor half blocks.
///
/// Each cell holds two pixels: background = top, foreground = bottom (`▄`).
pub struct TerminalPresenter {
    output_buf: Vec<u8>,
}

impl TerminalPresenter {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            output_buf: Vec::with_capacity(cols * rows * 25),
        }
    }

    pub fn present<W: Write>(&mut self, canvas: &Canvas, out: &mut W) -> std::io::Result<()> {
        self.encode(canvas)?;
        out.write_all(&self.output_buf)?;
        out.flush()
    }

    fn encode(&mut self, canvas: &Canvas) -> std::io::Result<()> {
        let width = canvas.pixel_width();
        let height = canvas.pixel_height();

        self.output_buf.clear();
        self.output_buf.extend_from_slice(b"\x1b[H");

        for y in (0..height).step_by(2) {
            let mut prev_top = NO_COLOR;
            let mut prev_bot = NO_COLOR;

            for x in 0..width {
                let top = canvas.pixel(x, y);
                // Odd heights repeat the last row
                let bot = if y + 1 < height { canvas.pixel(x, y + 1) } else { top };

                if top != prev_top {
                    write!(self.output_buf, "\x1b[48;2;{};{};{}m", top.0, top.1, top.2)?;
                    prev_top = top;
                }
                if bot != prev_bot {
                    write!(self.output_buf, "\x1b[38;2;{};{};{}m", bot.0, bot.1, bot.2)?;
                    prev_bot = bot;
                }

                self.output_buf.extend_from_slice("▄".as_bytes());
            }
            self.output_buf.extend_from_slice(b"\x1b[0m");
            if y + 2 < height {
                self.output_buf.extend_from_slice(b"\r\n");
            }
        }
        Ok(())
    }
}
