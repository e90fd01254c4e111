// Copyright 2026 the Spiro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draws a spirograph as an HTML page with an inline SVG.
//!
//! The marker shows a point recovered from its position on the curve.

#[cfg(feature = "std")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use spiro::{reverse, trace_path, Curve, SimpleSpirograph, TraceParams};

    let spiro = SimpleSpirograph::try_new(100.0, 70.0)?
        .with_outer_center((100.0, 100.0))
        .with_pen_offset((60.0, 0.0));
    let path = trace_path(&spiro, 0.0, 100.0, TraceParams::default())?;

    let t = reverse(&spiro, spiro.value(2.5), 2.0, 3.0)?;
    let marker = spiro.point(t);

    println!("<!DOCTYPE html>");
    println!("<html>");
    println!("<body>");
    println!("<svg height=\"200\" width=\"200\">");
    println!("  <path d=\"{path}\" stroke=\"black\" fill=\"none\" />");
    println!(
        "  <circle cx=\"{}\" cy=\"{}\" r=\"3\" fill=\"red\" />",
        marker.x, marker.y
    );
    println!("</svg>");
    println!("<p>{} segments, length {:.1}</p>", path.segments().count(), path.perimeter());
    println!("</body>");
    println!("</html>");
    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {
    println!("This example requires the standard library");
}
