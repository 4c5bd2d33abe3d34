use super::Key;

/// Sink for the keys currently held, e.g. a HID report writer.
pub trait ExternalCommunicator {
    type Error;
    fn is_ready(&self) -> bool;
    fn send_keys(&self, keys: &[Key]) -> Result<(), Self::Error>;
}
