// Webcam emotion analysis: classify a frame, then suggest a follow-up question.
// Each request stands alone; no interview progress is tracked between calls.

pub mod classifier;
pub mod follow_up;
pub mod handlers;
