#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config parsing must reject garbage without panicking
        if let Ok(config) = toml::from_str::<sasswatch::Config>(content) {
            let _ = config.suffix();
            let _ = serde_json::to_string(&config.compile.style);
        }
    }
});
