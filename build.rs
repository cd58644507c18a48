//! Build script for lev crate.
//!
//! Compresses `data/words.txt` with brotli into `OUT_DIR/words.txt.br` and
//! writes the CRC32 and byte length of the uncompressed list next to it, so the
//! binary embeds the blob with `include_bytes!` and can verify it on load.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const WORDS_SRC: &str = "data/words.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();

    println!("cargo:rerun-if-changed={WORDS_SRC}");
    println!("cargo:rerun-if-changed=build.rs");

    let raw = fs::read(Path::new(&manifest_dir).join(WORDS_SRC))
        .unwrap_or_else(|e| panic!("failed to read {WORDS_SRC}: {e}"));

    let mut compressed = Vec::new();
    {
        // quality 11, 4 MiB window
        let mut writer = brotli::CompressorWriter::new(&mut compressed, 4096, 11, 22);
        writer.write_all(&raw).unwrap();
    }

    fs::write(Path::new(&out_dir).join("words.txt.br"), &compressed).unwrap();

    let meta = format!(
        "pub(crate) const WORDS_CRC32: u32 = {:#010x};\npub(crate) const WORDS_LEN: usize = {};\n",
        crc32fast::hash(&raw),
        raw.len()
    );
    fs::write(Path::new(&out_dir).join("words_meta.rs"), meta).unwrap();

    // Tell rustc where to find the artifacts
    println!("cargo:rustc-env=LEV_OUT_DIR={out_dir}");
}
