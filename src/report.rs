// Text report for a lookup result. Sections are written in a fixed order
// and only when the corresponding field is present.

use std::io::{self, Write};

use crate::models::{Breakdown, LookupResult};

/// Knobs for `render`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Print the per-field cost lines after the total.
    pub pricing_breakdown: bool,
}

pub fn render<W: Write + ?Sized>(
    result: &LookupResult,
    opts: &RenderOptions,
    out: &mut W,
) -> io::Result<()> {
    let data = &result.data;

    if let Some(name) = &data.name {
        writeln!(out, "Name: {name}")?;
    }
    if let Some(profile) = &data.profile {
        writeln!(out, "Profile:")?;
        writeln!(out, "  Edu: {}", profile.edu)?;
        writeln!(out, "  Job: {}", profile.job)?;
        writeln!(out, "  Relationship: {}", profile.relationship)?;
    }
    if let Some(cnam) = &data.cnam {
        writeln!(out, "CNAM: {cnam}")?;
    }
    if let Some(gender) = &data.gender {
        writeln!(out, "Gender: {gender}")?;
    }
    if let Some(image) = &data.image {
        writeln!(out, "Image:")?;
        writeln!(out, "  Cover: {}", image.cover)?;
        writeln!(out, "  Small: {}", image.small)?;
        writeln!(out, "  Medium: {}", image.med)?;
        writeln!(out, "  Large: {}", image.large)?;
    }
    if let Some(address) = &data.address {
        writeln!(out, "Address: {address}")?;
    }
    if let Some(location) = &data.location {
        writeln!(out, "Location:")?;
        writeln!(
            out,
            "  City, State, Zip: {}, {}, {}",
            location.city, location.state, location.zip
        )?;
        writeln!(
            out,
            "  Lat, Long: {}, {}",
            location.geo.latitude, location.geo.longitude
        )?;
    }
    if let Some(provider) = &data.line_provider {
        writeln!(out, "Line Provider:")?;
        writeln!(out, "  ID: {}", provider.id)?;
        writeln!(out, "  Name: {}", provider.name)?;
        writeln!(out, "  MMS E-mail: {}", provider.mms_email)?;
        writeln!(out, "  SMS E-mail: {}", provider.sms_email)?;
    }
    if let Some(carrier) = &data.carrier {
        writeln!(out, "Carrier:")?;
        writeln!(out, "  ID: {}", carrier.id)?;
        writeln!(out, "  Name: {}", carrier.name)?;
    }
    if let Some(carrier) = &data.carrier_o {
        writeln!(out, "Original Carrier:")?;
        writeln!(out, "  ID: {}", carrier.id)?;
        writeln!(out, "  Name: {}", carrier.name)?;
    }
    if let Some(linetype) = &data.linetype {
        writeln!(out, "Linetype: {linetype}")?;
    }

    if !result.note.is_empty() {
        writeln!(out, "Note: {}", result.note)?;
    }
    writeln!(out, "Price Total: {:.4}", result.pricing.total)?;
    if opts.pricing_breakdown {
        render_breakdown(&result.pricing.breakdown, out)?;
    }

    if !result.missed.is_empty() {
        writeln!(out)?;
        writeln!(out, "Missed: {}", result.missed.join(", "))?;
    }

    Ok(())
}

fn render_breakdown<W: Write + ?Sized>(b: &Breakdown, out: &mut W) -> io::Result<()> {
    let lines = [
        ("Name", b.name),
        ("Profile", b.profile),
        ("CNAM", b.cnam),
        ("Gender", b.gender),
        ("Image", b.image),
        ("Address", b.address),
        ("Location", b.location),
        ("Line Provider", b.line_provider),
        ("Carrier", b.carrier),
        ("Original Carrier", b.carrier_o),
        ("Linetype", b.linetype),
    ];
    for (label, cost) in lines {
        writeln!(out, "  {label}: {cost:.4}")?;
    }
    Ok(())
}
