//! One load, edit, save pass.
//!
//! Answers given on the command line are used as-is; anything missing is
//! asked for through the [`Prompter`] unless prompting is disabled, in which
//! case the step is skipped.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use pixzoom_core::decode::load_pnm;
use pixzoom_core::encode::{save_png, save_pnm};
use pixzoom_core::{
    apply_plan, check_crop, check_region, check_zoom_factor, EditPlan, Region, ValidationMode,
};
use tracing::info;

use crate::prompt::Prompter;
use crate::report::{SessionReport, Size};

/// Everything the session needs to know before it starts.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub input: PathBuf,
    pub output: PathBuf,
    pub region: Option<Region>,
    pub flip_vertical: bool,
    pub flip_horizontal: bool,
    pub zoom: Option<i64>,
    pub mode: ValidationMode,
    pub png: Option<PathBuf>,
    pub interactive: bool,
}

/// Run the session, returning what was done.
pub fn run<R: BufRead, W: Write>(
    options: &Options,
    prompter: &mut Prompter<R, W>,
) -> Result<SessionReport> {
    if !options.input.is_file() {
        bail!("File \"{}\" does not exist", options.input.display());
    }

    let image = load_pnm(&options.input).with_context(|| {
        format!(
            "Couldn't load {}. Format might be unsupported",
            options.input.display()
        )
    })?;

    let input_size = Size::of(&image);
    let channels = image.channels();
    let max_value = image.max_value();
    prompter.say(format_args!(
        "\n{} image of size [{}x{}] has been loaded successfully.\n",
        channels.describe(),
        input_size.width,
        input_size.height
    ))?;

    let region = match options.region {
        Some(region) => {
            check_region(image.dimensions(), &region, options.mode)?;
            region
        }
        None if options.interactive => prompter.read_region(image.dimensions(), options.mode)?,
        None => Region::full(input_size.width, input_size.height),
    };
    // Size after the crop, which the zoom factor is checked against
    let cropped = check_crop(image.dimensions(), &region)?;

    let flip_vertical = confirm(
        prompter,
        options,
        options.flip_vertical,
        "Do you want to flip selected area vertically? (Y/N) ",
    )?;
    if flip_vertical {
        prompter.say("Flipping vertically..")?;
    }

    let flip_horizontal = confirm(
        prompter,
        options,
        options.flip_horizontal,
        "Do you want to flip selected area horizontally? (Y/N) ",
    )?;
    if flip_horizontal {
        prompter.say("Flipping horizontally..")?;
    }

    let zoom = match options.zoom {
        Some(factor) => Some(check_zoom_factor(cropped, factor)?),
        None => {
            if options.interactive
                && prompter.ask_yes_no("Do you want to zoom in selected area? (Y/N) ")?
            {
                Some(prompter.read_zoom_factor(cropped)?)
            } else {
                None
            }
        }
    };
    if zoom.is_some() {
        prompter.say("Zooming in..")?;
    }

    let plan = EditPlan {
        region,
        flip_vertical,
        flip_horizontal,
        zoom,
        mode: options.mode,
    };
    let (image, operations) = apply_plan(image, &plan)?;

    save_pnm(&image, &options.output)
        .with_context(|| format!("Failed to save {}", options.output.display()))?;
    info!(path = %options.output.display(), "Result saved");

    if let Some(png) = &options.png {
        save_png(&image, png).with_context(|| format!("Failed to save {}", png.display()))?;
        info!(path = %png.display(), "PNG preview saved");
    }

    Ok(SessionReport {
        input: options.input.clone(),
        output: options.output.clone(),
        channels,
        max_value,
        input_size,
        output_size: Size::of(&image),
        mode: options.mode,
        operations,
    })
}

/// A flag given on the command line wins; otherwise ask when interactive.
fn confirm<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    options: &Options,
    flag: bool,
    question: &str,
) -> Result<bool> {
    if flag {
        return Ok(true);
    }
    if options.interactive {
        return prompter.ask_yes_no(question);
    }
    Ok(false)
}
