use crate::*;
use std::io::Write;
use std::path::Path;

const PPM_LINE_MAX: usize = 70;

#[derive(Clone, Debug)]
pub struct Canvas {
    w: usize,
    h: usize,
    buf: Vec<RGB>,
}

fn to_byte(c: f64) -> u8 {
    (c.max(0.0).min(1.0) * 255.0).round() as u8
}

impl Canvas {
    pub fn new(w: usize, h: usize) -> Self {
        Canvas {
            w,
            h,
            buf: vec![RGB::black(); w * h],
        }
    }

    pub fn w(&self) -> usize {
        self.w
    }
    pub fn h(&self) -> usize {
        self.h
    }

    pub fn at(&self, x: usize, y: usize) -> RGB {
        self.buf[y * self.w + x]
    }

    pub fn at_mut(&mut self, x: usize, y: usize) -> &mut RGB {
        &mut self.buf[y * self.w + x]
    }

    pub fn set_row(&mut self, y: usize, row: &[RGB]) {
        let start = y * self.w;
        self.buf[start..start + self.w].copy_from_slice(row);
    }

    /// Plain (P3) PPM; every pixel row starts a new line and no line exceeds 70 characters.
    pub fn to_ppm(&self) -> String {
        let mut out = format!("P3\n{} {}\n255\n", self.w, self.h);
        for row in self.buf.chunks(self.w.max(1)) {
            let mut line = String::new();
            for c in row.iter() {
                for v in [c.r, c.g, c.b].iter() {
                    let token = to_byte(*v).to_string();
                    if !line.is_empty() && line.len() + 1 + token.len() > PPM_LINE_MAX {
                        out.push_str(&line);
                        out.push('\n');
                        line.clear();
                    }
                    if !line.is_empty() {
                        line.push(' ');
                    }
                    line.push_str(&token);
                }
            }
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    pub fn write_ppm<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);
        file.write_all(self.to_ppm().as_bytes())?;
        file.flush()?;
        Ok(())
    }
}
