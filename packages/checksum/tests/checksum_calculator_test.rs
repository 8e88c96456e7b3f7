//! End-to-end checksum computation over strings, files and readers

use cryypt_checksum::{
    checksum_file, checksum_file_async, checksum_str, compute_digest,
    compute_digest_with_chunk_size, resolve_algorithm, Checksum, ChecksumError, HashAlgorithm,
    Radix,
};
use hex_literal::hex;
use std::io::Write;
use std::path::PathBuf;

const TEST_STRING: &str = "some.user@whatever.domain.makes.sense.com";

fn init_logging() {
    let _ = env_logger::Builder::from_default_env()
        .is_test(true)
        .try_init();
}

fn test_file() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/checksum-test.txt")
}

fn expected_for_file() -> [(HashAlgorithm, &'static str); 5] {
    [
        (HashAlgorithm::Md5, "9e9eed11b1f1cd8c81d5aca40b79d30d"),
        (
            HashAlgorithm::Sha256,
            "74a017d31ebda7105ffb3f6459cc0895dbedb20abd6c5e44f15a509715417f09",
        ),
        (
            HashAlgorithm::Sha512,
            "bd4e70cd60812dd2628217982c713dffa8fabb2d72f9e954d9a81df3c76ba012\
             94b8486bb3bb045d1cd8d42c64e69f8e18f32b15c9df488b87609674c0c0af3c",
        ),
        (
            HashAlgorithm::Sha3_256,
            "076888663b9d3acebc8655a77b5080ca3d3eae2313a3e5947bc7adb222abb795",
        ),
        (
            HashAlgorithm::Sha3_512,
            "9641b6bc192afe252417eeb1f1a4d7f6285628f715ceaf747ae1242476b5adb9\
             5ae6204b8dfccd5cf54fc6b1b6c5347e95d47b9370b47264ef1eab5b9db4e877",
        ),
    ]
}

#[test]
fn string_checksums_match_reference_values() -> cryypt_checksum::Result<()> {
    init_logging();
    let expected = [
        (HashAlgorithm::Md5, "16ff51a5b1cee26106c33e0da3e9be35"),
        (
            HashAlgorithm::Sha256,
            "8c87eca90374ba4248befe0c1a1e7ae5502f3e525be62f332a9392976967a7c2",
        ),
        (
            HashAlgorithm::Sha512,
            "85b7d43d08fc85089c0964906a2bcc9c142f807fbb94e1e903a884ae07c7bf17\
             b437cfd330099bc53ef29634c5d0c688d845764085707d0c9dfbdc5e582ef4d9",
        ),
        (
            HashAlgorithm::Sha3_256,
            "a95ea1266c154be025aa66053d2293ce763a92894c71ed5dd178924e951b34d4",
        ),
        (
            HashAlgorithm::Sha3_512,
            "6d209c1a08bca005c4b8ee97a81b5f9cd20aefe2123821b36397d109b095cb38\
             c78cc383ec34941dc6f72afea14b4bd8315031193e6dbe0112744c74bad246f2",
        ),
    ];

    for (algorithm, checksum) in expected {
        assert_eq!(
            checksum_str(algorithm.name(), TEST_STRING)?,
            checksum,
            "The {algorithm} checksum values are not identical"
        );
    }
    Ok(())
}

#[test]
fn file_checksums_match_reference_values() -> cryypt_checksum::Result<()> {
    init_logging();
    for (algorithm, checksum) in expected_for_file() {
        assert_eq!(
            checksum_file(algorithm.name(), test_file())?,
            checksum,
            "The {algorithm} checksum values are not identical"
        );
    }
    Ok(())
}

#[tokio::test]
async fn async_file_checksums_match_reference_values() -> cryypt_checksum::Result<()> {
    init_logging();
    for (algorithm, checksum) in expected_for_file() {
        assert_eq!(checksum_file_async(algorithm.name(), test_file()).await?, checksum);
    }
    Ok(())
}

#[test]
fn empty_input_matches_well_known_digests() -> cryypt_checksum::Result<()> {
    let cases: [(HashAlgorithm, &[u8]); 5] = [
        (HashAlgorithm::Md5, &hex!("d41d8cd98f00b204e9800998ecf8427e")),
        (
            HashAlgorithm::Sha256,
            &hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"),
        ),
        (
            HashAlgorithm::Sha512,
            &hex!(
                "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce"
                "47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"
            ),
        ),
        (
            HashAlgorithm::Sha3_256,
            &hex!("a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"),
        ),
        (
            HashAlgorithm::Sha3_512,
            &hex!(
                "a69f73cca23a9ac5c8b567dc185a756e97c982164fe25859e0d1dcc1475c80a6"
                "15b2123af1f5f94c11e3e9402c3ac558f500199d95b6d3e301758586281dcd26"
            ),
        ),
    ];

    for (algorithm, expected) in cases {
        let digest = compute_digest(algorithm, std::io::empty())?;
        assert_eq!(digest.as_bytes(), expected, "{algorithm}");
        assert_eq!(digest.len(), algorithm.digest_len());
    }
    Ok(())
}

#[test]
fn hashing_is_deterministic() -> cryypt_checksum::Result<()> {
    let algorithm = resolve_algorithm("sha3-256")?;
    let first = compute_digest(algorithm, TEST_STRING.as_bytes())?;
    let second = compute_digest(algorithm, TEST_STRING.as_bytes())?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn missing_file_is_a_read_error() {
    init_logging();
    let dir = match tempfile::tempdir() {
        Ok(dir) => dir,
        Err(e) => panic!("tempdir: {e}"),
    };
    let missing = dir.path().join("does-not-exist.bin");

    match checksum_file("MD5", &missing) {
        Err(ChecksumError::Read { origin, source }) => {
            assert!(origin.contains("does-not-exist.bin"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Read error, got {other:?}"),
    }
}

#[test]
fn unknown_algorithm_is_rejected() {
    let result = checksum_str("not-a-real-algo", TEST_STRING);
    assert!(result.is_err_and(|e| e.is_unsupported_algorithm()));
}

#[test]
fn chunk_size_does_not_change_digest() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = tempfile::NamedTempFile::new()?;
    let contents: Vec<u8> = (0..10_000u32).map(|i| (i * 7 % 256) as u8).collect();
    file.write_all(&contents)?;
    file.flush()?;

    for algorithm in HashAlgorithm::ALL {
        let reference = compute_digest(algorithm, contents.as_slice())?;
        for chunk_size in [1, 3, 64, 1024, 4096, 10_000, 65_536] {
            let from_reader =
                compute_digest_with_chunk_size(algorithm, contents.as_slice(), chunk_size)?;
            let from_file = Checksum::algorithm(algorithm)
                .with_chunk_size(chunk_size)
                .compute_file(file.path())?;
            assert_eq!(from_reader, reference, "{algorithm} chunk {chunk_size}");
            assert_eq!(from_file, reference, "{algorithm} chunk {chunk_size}");
        }
    }
    Ok(())
}

#[test]
fn builder_renders_in_every_radix() -> cryypt_checksum::Result<()> {
    let builder = Checksum::sha256();
    let digest = builder.compute_str(TEST_STRING)?;

    assert_eq!(builder.str_string(TEST_STRING)?, digest.to_hex());
    assert_eq!(
        builder.with_radix(Radix::Binary).str_string(TEST_STRING)?.len(),
        256
    );
    assert_eq!(
        builder.with_radix(Radix::Octal).file_string(test_file())?.len(),
        96
    );
    assert_eq!(digest.to_string(), digest.to_hex());
    Ok(())
}
