#![no_main]

use libfuzzer_sys::fuzz_target;
use path_creator::{BezierPath, BezierPathRecord, DiscretizeSettings, SampledPath};

// Beliebige Pfad-Dateien dürfen nur Fehler liefern, nie panicen.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(record) = serde_json::from_str::<BezierPathRecord>(text) else {
        return;
    };
    let Ok(path) = BezierPath::from_record(record) else {
        return;
    };
    // Extreme Koordinaten können sehr viele Teilschritte erzeugen
    if path.path_bounds().size().max_element() > 1.0e4 {
        return;
    }
    if let Ok(sampled) = SampledPath::build(&path, &DiscretizeSettings::default()) {
        let _ = sampled.point_at_time(0.5, Default::default());
        let _ = sampled.closest_point(path.point(0));
    }
});

