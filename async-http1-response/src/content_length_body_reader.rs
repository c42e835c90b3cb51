use crate::{
    body_reader::BodyReadOutput,
    byte_source::{next_byte, ByteSource},
    error::ReadResponseError,
};

//
//
//
#[derive(Default)]
pub struct ContentLengthBodyReader {
    length: usize,
}
impl ContentLengthBodyReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_length(&mut self, length: usize) {
        self.length = length
    }
    /// Bytes still expected.
    pub fn get_length(&self) -> usize {
        self.length
    }

    /// Appends up to the remaining length to `body_buf`, `Partial` if the source ends first.
    pub async fn read<S>(
        &mut self,
        source: &mut S,
        body_buf: &mut Vec<u8>,
    ) -> Result<BodyReadOutput, ReadResponseError>
    where
        S: ByteSource + ?Sized,
    {
        let mut n = 0_usize;

        while self.length > 0 {
            match next_byte(source).await? {
                Some(byte) => {
                    body_buf.push(byte);
                    self.length -= 1;
                    n += 1;
                }
                None => return Ok(BodyReadOutput::Partial(n)),
            }
        }

        Ok(BodyReadOutput::Completed(n))
    }
}
