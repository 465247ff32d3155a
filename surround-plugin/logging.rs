use std::{
  io,
  path::Path,
  sync::atomic::{
    AtomicBool,
    Ordering,
  },
};

use log::LevelFilter;

use crate::config::ensure_parent_dir;

/// Set once a call has claimed the process-wide logger.
static CLAIMED: AtomicBool = AtomicBool::new(false);

/// Route `log` records at `level` and above to the file at `path`.
///
/// Only the first call in a process installs a logger. Later calls return
/// `Ok(false)` and leave the existing logger in place, without touching
/// `path`.
pub fn setup_logging(path: &Path, level: LevelFilter) -> io::Result<bool> {
  if CLAIMED.swap(true, Ordering::AcqRel) {
    return Ok(false);
  }
  let file = ensure_parent_dir(path).and_then(|()| fern::log_file(path));
  let file = match file {
    Ok(file) => file,
    Err(err) => {
      CLAIMED.store(false, Ordering::Release);
      return Err(err);
    },
  };

  let dispatch = fern::Dispatch::new()
    .format(|out, message, record| {
      out.finish(format_args!(
        "{} {} [{}] {}",
        chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
        record.target(),
        record.level(),
        message
      ))
    })
    .level(level)
    .chain(file);

  match dispatch.apply() {
    Ok(()) => {
      log::info!("logging to {} at {level}", path.display());
      Ok(true)
    },
    Err(_) => Ok(false),
  }
}
