//! Source tree fixtures.

use std::fs;
use std::path::{Path, PathBuf};

/// Write `<base>.h`, `<base>.cc` and `<base>.i` into `dir`.
///
/// Returns the path of the `.cc` file, ready to use as a build source.
pub fn write_sources(dir: &Path, base: &str) -> PathBuf {
    fs::create_dir_all(dir).unwrap();

    fs::write(
        dir.join(format!("{base}.h")),
        format!("#pragma once\nint {base}_size();\n"),
    )
    .unwrap();

    let source = dir.join(format!("{base}.cc"));
    fs::write(
        &source,
        format!("#include \"{base}.h\"\n\nint {base}_size() {{ return 0; }}\n"),
    )
    .unwrap();

    fs::write(
        dir.join(format!("{base}.i")),
        format!("%module {base}\n%{{\n#include \"{base}.h\"\n%}}\n%include \"{base}.h\"\n"),
    )
    .unwrap();

    source
}
