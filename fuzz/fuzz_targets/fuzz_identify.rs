#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = typesniff::identify_bytes(data);
    let _ = typesniff::identify_bytes_with_name(data, "report.xlsx");
    let _ = typesniff::identify_bytes_with_name(data, "message.msg");
});
