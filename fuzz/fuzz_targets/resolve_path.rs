//! Fuzz target for path resolution with arbitrary string input.
//!
//! Run with: cargo +nightly fuzz run resolve_path
//!
//! Key properties being tested:
//! - Resolution never climbs above the root
//! - Resolved paths contain no empty, `.` or `..` segments
//! - Qualified paths stay under the root segment

#![no_main]

use libfuzzer_sys::fuzz_target;
use zipvfs::resolve::{UserPath, resolve};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    // Split into a working directory and the typed argument
    let (cwd, arg) = input.split_once('\n').unwrap_or(("", input));
    let cwd = UserPath::parse(cwd);
    let path = resolve(&cwd, arg);

    for segment in path.segments() {
        assert!(
            !segment.is_empty() && segment != "." && segment != "..",
            "Unnormalized segment {:?} from {:?}",
            segment,
            arg
        );
    }

    if let Ok(key) = path.qualify("root") {
        assert_eq!(key.first_component(), "root");
        assert!(key.components().skip(1).eq(path.segments()));
    }
});
