//! Write `legend.html` showing the color stops of every built-in
//! palette for a sample of constituency member counts, and print the
//! Mapbox paint of the default layer.

use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use rgb::RGB8;
use choropleth_brewery::{BoundaryStatistic, ChoroplethConfig,
                         ChoroplethScale, ColorRange, ColorStop, CssColor,
                         PaletteName, RGBColor, DEFAULT_STEPS};

type Err = Box<dyn Error>;

fn table_of_stops(fh: &mut impl Write, stops: &[ColorStop<RGB8>],
                  width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for s in stops {
        writeln!(fh, "  <td title=\"{:.2}\" style=\"width: {width}px; \
                      height: 30px; background-color: {}\"></td>",
                 s.value, s.color.css())?;
    }
    writeln!(fh, "<td rowspan=\"2\" style=\"padding-left: 7px\">\
                  {comment}</td></tr><tr>")?;
    for s in stops {
        writeln!(fh, "  <td style=\"width: {width}px; height: 12px; \
                      background-color: {}\"></td>",
                 s.color.to_gray().css())?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

fn scale(fh: &mut impl Write, stats: &[BoundaryStatistic],
         palette: impl ColorRange<RGB8>, comment: &str) -> Result<(), Err> {
    let scale = ChoroplethScale::from_statistics(stats, palette);
    let stops = scale.color_stops(DEFAULT_STEPS);
    table_of_stops(fh, stops.as_slice(), 13, comment)?;
    table_of_stops(fh, &scale.legend(5), 78,
                   &format!("{comment} (legend)"))
}

fn main() -> Result<(), Err> {
    let stats: Vec<_> = [("E14000530", 12.), ("E14000531", 48.),
                         ("E14000532", 3.), ("E14000533", 27.),
                         ("E14000534", 31.)]
        .into_iter()
        .map(|(id, n)| BoundaryStatistic::new(id, n))
        .collect();

    let mut fh = BufWriter::new(File::create("legend.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>Choropleth scales: {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;

    writeln!(fh, "<h3>Palettes</h3>")?;
    for name in PaletteName::ALL {
        scale(&mut fh, &stats, name.gradient(), name.as_str())?;
    }

    writeln!(fh, "<h3>Inverted</h3>")?;
    for name in [PaletteName::Blues, PaletteName::Viridis] {
        scale(&mut fh, &stats, name.gradient().reversed(),
              &format!("{name} (inverted)"))?;
    }

    writeln!(fh, "<h3>Gradients</h3>")?;
    let c0 = RGB8::new(94, 0, 99);
    let c1 = RGB8::new(255, 235, 170);
    scale(&mut fh, &stats, c1.gradient(&c0), "cream to purple")?;
    scale(&mut fh, &[], c1.gradient(&c0), "cream to purple (no data)")?;

    writeln!(fh, "</body>\n\
                  </html>")?;

    let paint = ChoroplethConfig::default().fill_paint(&stats);
    println!("{}", serde_json::to_string_pretty(&paint)?);
    Ok(())
}
