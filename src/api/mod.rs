/*
* API route groups exposed by the VoiceGuard service.
*/

pub mod service;
pub mod voice;
