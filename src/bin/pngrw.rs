use pngrw::png::*;

use std::path::Path;

fn main() {
  let paths: Vec<String> = std::env::args().skip(1).collect();
  if paths.is_empty() {
    eprintln!("usage: pngrw FILE.png [FILE.png ...]");
    std::process::exit(2);
  }
  let mut failed = false;
  for path in &paths {
    if let Err(e) = list_png_file(path) {
      println!("{path}: {e}");
      failed = true;
    }
  }
  if failed {
    std::process::exit(1);
  }
}

fn list_png_file<P: AsRef<Path>>(path: P) -> Result<(), Box<dyn std::error::Error>> {
  let path = path.as_ref();
  let bytes = std::fs::read(path)?;
  println!("{}: {} bytes", path.display(), bytes.len());
  let mut chunks = Vec::new();
  for chunk in PngChunkIter::from_png_bytes(&bytes, true)? {
    let chunk = chunk?;
    let flags = [
      if chunk.ty().is_critical() { "critical" } else { "ancillary" },
      if chunk.ty().is_public() { "public" } else { "private" },
      if chunk.ty().is_safe_to_copy() { "safe-to-copy" } else { "unsafe-to-copy" },
    ];
    println!("  {} {:>10} bytes  crc {:08X}  {}", chunk.ty(), chunk.data().len(), chunk.crc(), flags.join(" "));
    chunks.push(chunk);
  }
  println!("  {}", Metadata::read(&chunks)?);
  Ok(())
}
