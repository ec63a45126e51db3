#![doc = r#"
favicrop — turn a horizontal logo into a square favicon.

Most site logos are an icon mark followed by a wordmark. favicrop crops the logo to
its visible content (non-transparent pixels), isolates the icon on the left, and
resizes it to a small square suitable for a favicon. The same pipeline powers the
`favicrop` CLI and can be embedded in build scripts.

Pipeline
--------
1. decode the source and convert to RGBA,
2. crop to the bounding box of pixels with alpha above a threshold,
3. isolate the icon (`IconStrategy`): a left-edge square, the region before the
   first transparent column gap, or the whole content,
4. optionally pad to a centered transparent square,
5. resize (Lanczos3 by default) and write PNG, or a multi-size ICO.

Quick start
-----------
```rust,no_run
use std::path::Path;
use favicrop::{create_favicon, FaviconParams};

fn main() -> favicrop::Result<()> {
    let report = create_favicon(
        Path::new("src/assets/logo.png"),
        Path::new("public/favicon.png"),
        &FaviconParams::default(),
    )?;
    println!("icon region: {:?}", report.icon_region);
    Ok(())
}
```

Custom parameters
-----------------
```rust,no_run
use std::path::Path;
use favicrop::{create_favicon, FaviconParams, IconStrategy, ResizeFilter};

fn main() -> favicrop::Result<()> {
    let params = FaviconParams {
        size: 32,
        strategy: IconStrategy::Gap,
        filter: ResizeFilter::CatmullRom,
        pad: true,
        ..Default::default()
    };
    // `.ico` output embeds every size in `params.ico_sizes`
    create_favicon(Path::new("logo.png"), Path::new("favicon.ico"), &params)?;
    Ok(())
}
```

Error handling
--------------
All public functions return `favicrop::Result<T>`; match on `favicrop::Error` to
handle specific cases.

```rust,no_run
use std::path::Path;
use favicrop::{create_favicon, Error, FaviconParams};

fn main() {
    match create_favicon(Path::new("missing.png"), Path::new("out.png"), &FaviconParams::default()) {
        Ok(_) => {}
        Err(Error::Io(e)) => eprintln!("I/O error: {e}"),
        Err(Error::Image(e)) => eprintln!("Could not decode image: {e}"),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — bounding box, icon isolation, padding, resize and pipeline primitives.
- [`io`] — image decoding and PNG/ICO/report writers.
- [`types`] — enums and geometry types.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::params::FaviconParams;
pub use crate::core::processing::pipeline::{Favicon, build_favicon};
pub use error::{Error, Result};
pub use crate::io::writers::report::FaviconReport;
pub use types::{BoundingBox, CropRegion, IconStrategy, OutputFormat, ResizeFilter};

pub use api::{create_favicon, create_favicon_to_buffer};
