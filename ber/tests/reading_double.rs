use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use ber::Reader;
use rstest::rstest;
use tlv::identifier::{BIT_STRING, NULL, SEQUENCE};
use tlv::reading::Reading;

// ecPublicKey
const EC_PUBLIC_KEY: [u8; 9] = [0x06, 0x07, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x02, 0x01];

/// Consumer code written against the trait: returns the raw public key of a
/// SubjectPublicKeyInfo whose algorithm is `expected_algorithm`.
fn read_public_key<R: Reading>(
    reader: &mut R,
    expected_algorithm: &[u8],
) -> Result<Vec<u8>, R::Error> {
    let mut info = reader.reader_for_contents(Some(SEQUENCE))?;
    let mut algorithm = info.reader_for_contents(Some(SEQUENCE))?;
    algorithm.skip(expected_algorithm)?;
    if algorithm.peek() == NULL {
        algorithm.skip_component(Some(NULL))?;
    }
    info.read_contents_of_bit_string()
}

#[derive(Debug, PartialEq, Eq)]
enum Call {
    ReaderForContents(Option<u8>),
    Skip(Vec<u8>),
    SkipComponent(Option<u8>),
    ReadContentsOfBitString,
}

#[derive(Debug, PartialEq, Eq)]
struct Unexpected;

/// Replays canned results and records what was asked of it.
#[derive(Default)]
struct ScriptedReader {
    peeks: VecDeque<u8>,
    contents: VecDeque<Vec<u8>>,
    calls: Rc<RefCell<Vec<Call>>>,
}

impl ScriptedReader {
    fn child(&self) -> Self {
        ScriptedReader {
            peeks: VecDeque::new(),
            contents: VecDeque::new(),
            calls: self.calls.clone(),
        }
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl Reading for ScriptedReader {
    type Error = Unexpected;

    fn peek(&self) -> u8 {
        self.peeks.front().copied().unwrap_or(0x00)
    }

    fn unwrap(&mut self, _identified_by: Option<u8>) -> Result<(), Self::Error> {
        Err(Unexpected)
    }

    fn read_contents(&mut self, _identified_by: Option<u8>) -> Result<Vec<u8>, Self::Error> {
        Err(Unexpected)
    }

    fn reader_for_contents(&mut self, identified_by: Option<u8>) -> Result<Self, Self::Error> {
        self.record(Call::ReaderForContents(identified_by));
        let mut child = self.child();
        child.peeks = std::mem::take(&mut self.peeks);
        Ok(child)
    }

    fn read_contents_of_bit_string(&mut self) -> Result<Vec<u8>, Self::Error> {
        self.record(Call::ReadContentsOfBitString);
        self.contents.pop_front().ok_or(Unexpected)
    }

    fn skip_component(&mut self, identified_by: Option<u8>) -> Result<(), Self::Error> {
        self.record(Call::SkipComponent(identified_by));
        self.peeks.pop_front();
        Ok(())
    }

    fn skip(&mut self, expected: &[u8]) -> Result<(), Self::Error> {
        self.record(Call::Skip(expected.to_vec()));
        Ok(())
    }
}

#[rstest(
    peeks,
    expected_calls,
    case(vec![NULL], vec![
        Call::ReaderForContents(Some(SEQUENCE)),
        Call::ReaderForContents(Some(SEQUENCE)),
        Call::Skip(EC_PUBLIC_KEY.to_vec()),
        Call::SkipComponent(Some(NULL)),
        Call::ReadContentsOfBitString,
    ]),
    case(vec![], vec![
        Call::ReaderForContents(Some(SEQUENCE)),
        Call::ReaderForContents(Some(SEQUENCE)),
        Call::Skip(EC_PUBLIC_KEY.to_vec()),
        Call::ReadContentsOfBitString,
    ])
)]
fn test_consumer_against_double(peeks: Vec<u8>, expected_calls: Vec<Call>) {
    let mut reader = ScriptedReader {
        peeks: peeks.into(),
        ..Default::default()
    };

    let err = read_public_key(&mut reader, &EC_PUBLIC_KEY).unwrap_err();

    // the bit string contents were never scripted on the child
    assert_eq!(Unexpected, err);
    assert_eq!(expected_calls, *reader.calls.borrow());
}

#[rstest(
    input,
    // without parameters
    case(vec![
        0x30, 0x0f, 0x30, 0x09, 0x06, 0x07, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x02, 0x01, BIT_STRING,
        0x02, 0x00, 0x04,
    ]),
    // with NULL parameters
    case(vec![
        0x30, 0x11, 0x30, 0x0b, 0x06, 0x07, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x02, 0x01, NULL, 0x00,
        BIT_STRING, 0x02, 0x00, 0x04,
    ])
)]
fn test_consumer_against_reader(input: Vec<u8>) {
    let mut reader = Reader::new(input);

    let key = read_public_key(&mut reader, &EC_PUBLIC_KEY).unwrap();

    assert_eq!(vec![0x04], key);
}
