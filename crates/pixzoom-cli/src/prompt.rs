//! Interactive questions on a line-oriented terminal.
//!
//! Input is read as whitespace separated tokens, so `3 4` on one line
//! answers both the X and Y question. Every question is asked again until
//! the answer is acceptable; end of input is an error.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use anyhow::{bail, Result};
use pixzoom_core::{
    check_crop, check_region, check_zoom_factor, Point2d, Region, ValidationMode,
};

pub struct Prompter<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Print a line to the user.
    pub fn say(&mut self, message: impl std::fmt::Display) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("unexpected end of input");
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Ask for an integer, repeating until one is given.
    pub fn read_int(&mut self, label: &str) -> Result<i64> {
        loop {
            write!(self.output, "{label}")?;
            self.output.flush()?;

            let token = self.next_token()?;
            match token.parse() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.output, "\n{token:?} is not an integer number.")?,
            }
        }
    }

    /// Ask for the X and Y coordinates of a point.
    pub fn read_point(&mut self, title: &str) -> Result<Point2d> {
        writeln!(self.output, "{title}")?;
        let x = self.read_coordinate("X: ")?;
        let y = self.read_coordinate("Y: ")?;
        writeln!(self.output)?;
        Ok(Point2d::new(x, y))
    }

    fn read_coordinate(&mut self, label: &str) -> Result<i32> {
        loop {
            let value = self.read_int(label)?;
            match i32::try_from(value) {
                Ok(v) => return Ok(v),
                Err(_) => writeln!(self.output, "\n{value} is out of range.")?,
            }
        }
    }

    /// Ask for a region until it passes validation and can be cropped.
    pub fn read_region(&mut self, dimensions: (u32, u32), mode: ValidationMode) -> Result<Region> {
        loop {
            writeln!(
                self.output,
                "Please provide coordinates of the area you would like to process."
            )?;
            let upper_left = self.read_point("UPPER LEFT POINT")?;
            let lower_right = self.read_point("LOWER RIGHT POINT")?;
            let region = Region::new(upper_left, lower_right);

            let checked = check_region(dimensions, &region, mode)
                .map_err(|e| e.to_string())
                .and_then(|()| check_crop(dimensions, &region).map_err(|e| e.to_string()));
            match checked {
                Ok(_) => return Ok(region),
                Err(message) => {
                    tracing::debug!(?region, "Region rejected");
                    writeln!(self.output, "\n{message}\n")?;
                }
            }
        }
    }

    /// Ask a yes/no question. `Y` and `N` are accepted in either case.
    pub fn ask_yes_no(&mut self, question: &str) -> Result<bool> {
        loop {
            write!(self.output, "{question}")?;
            self.output.flush()?;

            let answer = self.next_token()?.to_lowercase();
            match answer.as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => writeln!(
                    self.output,
                    "\nYou can answer only by using [y] for acceptance, or [n] for refusal. Please try again.\n"
                )?,
            }
        }
    }

    /// Ask for a zoom factor until one fits the size limit.
    pub fn read_zoom_factor(&mut self, dimensions: (u32, u32)) -> Result<u32> {
        loop {
            let factor = self.read_int("How much do you want to zoom-in by (integer number): ")?;
            match check_zoom_factor(dimensions, factor) {
                Ok(factor) => return Ok(factor),
                Err(e) => writeln!(self.output, "\n{e}\n")?,
            }
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output_of(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    #[test]
    fn test_read_point_from_separate_lines() {
        let mut p = prompter("3\n4\n");
        assert_eq!(p.read_point("UPPER LEFT POINT").unwrap(), Point2d::new(3, 4));
    }

    #[test]
    fn test_read_point_from_one_line() {
        let mut p = prompter("-1 7\n");
        assert_eq!(p.read_point("P").unwrap(), Point2d::new(-1, 7));
    }

    #[test]
    fn test_read_int_retries_on_garbage() {
        let mut p = prompter("abc\n12\n");
        assert_eq!(p.read_int("N: ").unwrap(), 12);
        assert!(output_of(p).contains("is not an integer"));
    }

    #[test]
    fn test_read_region_retries_until_valid() {
        // First region runs past the right edge, second is fine
        let mut p = prompter("0 0 9 2\n1 1 3 3\n");
        let region = p.read_region((4, 4), ValidationMode::Compatible).unwrap();

        assert_eq!(region, Region::from_corners(1, 1, 3, 3));
        assert!(output_of(p).contains("within range [0, 0] - [4, 4]"));
    }

    #[test]
    fn test_read_region_rejects_uncroppable_region() {
        // Passes the compatible check but extends below the image
        let mut p = prompter("0 0 2 9\n0 0 2 2\n");
        let region = p.read_region((4, 4), ValidationMode::Compatible).unwrap();

        assert_eq!(region, Region::from_corners(0, 0, 2, 2));
        assert!(output_of(p).contains("reaches outside"));
    }

    #[test]
    fn test_ask_yes_no_case_insensitive() {
        let mut p = prompter("Y\nn\n");
        assert!(p.ask_yes_no("Flip? ").unwrap());
        assert!(!p.ask_yes_no("Flip? ").unwrap());
    }

    #[test]
    fn test_ask_yes_no_retries() {
        let mut p = prompter("maybe\ny\n");
        assert!(p.ask_yes_no("Flip? ").unwrap());
        assert!(output_of(p).contains("Please try again"));
    }

    #[test]
    fn test_read_zoom_factor_retries() {
        let mut p = prompter("0\n10\n2\n");
        assert_eq!(p.read_zoom_factor((100, 100)).unwrap(), 2);

        let out = output_of(p);
        assert!(out.contains("greater than 0"));
        assert!(out.contains("too big"));
    }

    #[test]
    fn test_end_of_input_is_error() {
        let mut p = prompter("y");
        assert!(p.ask_yes_no("? ").unwrap());
        assert!(p.ask_yes_no("? ").is_err());
    }
}
