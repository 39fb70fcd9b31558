use std::fs::File;
use std::io::{Read, Seek};

/// Opens a trace file for replay
///
/// Trace replays read front to back exactly once, so on unix systems the file
/// is memory mapped and the OS is advised accordingly
pub fn open_trace(path: &str) -> Result<impl Read + Seek, String> {
    let file = File::open(path)
        .map_err(|e| format!("Couldn't open the trace file at path {path}: {e}"))?;
    // Compatibility on other systems
    #[cfg(not(unix))]
    {
        use std::io::BufReader;
        // Traces are line oriented; a large buffer that is a multiple of the
        // standard 4096 block size keeps reads aligned
        const BUFFER_SIZE: usize = 64 * 4096;
        Ok(BufReader::with_capacity(BUFFER_SIZE, file))
    }
    #[cfg(unix)]
    {
        use std::io::Cursor;
        use memmap2::{Advice, Mmap};
        unsafe {
            let m = Mmap::map(&file).map_err(|e| format!("Couldn't memory map the file: {e}"))?;
            m.advise(Advice::Sequential)
                .map_err(|e| format!("Failed to provide access advice to the OS, {e}"))?;
            Ok(Cursor::new(m))
        }
    }
}
