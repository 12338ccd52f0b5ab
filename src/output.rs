//! Status-line emission for the bar.

use crate::display::Frame;

/// Serializes a frame to a single JSON status line.
pub fn frame_json(frame: &Frame) -> String {
    let mut line = serde_json::json!({
        "text": frame.text,
        "tooltip": frame.text,
        "class": frame.class,
        "percentage": frame.percent.round() as u64,
        "animate": frame.animate,
    });
    if let Some(art) = &frame.artwork {
        line["art"] = serde_json::json!(art);
    }
    line.to_string()
}

/// Prints the frame's status line, only if the output changed.
pub fn print_frame(frame: &Frame, last_output: &mut String) {
    let line = frame_json(frame);
    if *last_output != line {
        println!("{}", line);
        *last_output = line;
    }
}
