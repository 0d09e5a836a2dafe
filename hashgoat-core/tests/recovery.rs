use std::io::{self, Write};
use std::num::NonZeroUsize;

use hashgoat_core::{
    Algorithm, Digester, Error, LineStream, Mode, Outcome, Recovery, read_lines, recover_bulk,
    recover_streaming,
};
use proptest::prelude::*;
use tempfile::NamedTempFile;

fn wordlist_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file.flush().unwrap();
    file
}

fn workers(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

/// Hashes the ASCII-lowercased line, so case variants collide.
struct CaseFolding;

impl Digester for CaseFolding {
    fn digest(&self, plaintext: &[u8]) -> String {
        Algorithm::Md5.digester().digest(&plaintext.to_ascii_lowercase())
    }
}

#[test]
fn test_every_algorithm_both_modes() {
    let cases = [
        (Algorithm::Md5, "test_md5", "9050bddcf415f2d0518804e551c1be98"),
        (Algorithm::Sha1, "test_sha1", "9db4507552981975bccac89a41dab2cc821bff2e"),
        (
            Algorithm::Sha256,
            "test_sha256",
            "fda177bb1336270b24e4df0fd0c1dd0596c44699204f57c83ce70a0f19173be4",
        ),
        (
            Algorithm::Sha512,
            "test_sha512",
            "e335ec8aa0e729469a06c50fe8f93621b544970ebdb99ab6351368f3541f63fc\
             37ed92bb2fee40549de8ebfeb167386859391866541d9578684ec06ea7a70cea",
        ),
    ];

    for (algorithm, plaintext, target) in cases {
        let file = wordlist_file(&["alpha", "beta", plaintext, "gamma", "delta"]);
        let recovery = Recovery::new(algorithm.digester(), target);
        let expected = Outcome::Found(plaintext.as_bytes().to_vec());

        let modes = [
            Mode::Bulk { workers: workers(1) },
            Mode::Bulk { workers: workers(3) },
            Mode::Streaming,
        ];
        for mode in modes {
            let outcome = recovery.run_file(file.path(), mode).unwrap();
            assert_eq!(outcome, expected, "{algorithm} {mode:?}");
        }
    }
}

#[test]
fn test_not_found_in_file() {
    // md5("e")
    let file = wordlist_file(&["a", "b", "c", "d"]);
    let recovery = Recovery::new(Algorithm::Md5.digester(), "e1671797c52e15f763380b45e841ec32");

    assert_eq!(recovery.run_file(file.path(), Mode::Streaming).unwrap(), Outcome::NotFound);
    assert_eq!(
        recovery.run_file(file.path(), Mode::Bulk { workers: workers(10) }).unwrap(),
        Outcome::NotFound
    );
}

#[test]
fn test_empty_file() {
    let file = wordlist_file(&[]);
    let recovery = Recovery::new(Algorithm::Md5.digester(), "dac0d8a5cf48040d1bb724ea18a4f103");

    assert!(read_lines(file.path()).unwrap().is_empty());
    assert_eq!(recovery.run_file(file.path(), Mode::Streaming).unwrap(), Outcome::NotFound);
    assert_eq!(
        recovery.run_file(file.path(), Mode::Bulk { workers: workers(4) }).unwrap(),
        Outcome::NotFound
    );
}

#[test]
fn test_crlf_wordlist_matches_trimmed_line() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"first\r\nhashgoat\r\nlast").unwrap();
    file.flush().unwrap();

    let recovery = Recovery::new(Algorithm::Md5.digester(), "dac0d8a5cf48040d1bb724ea18a4f103");
    assert_eq!(
        recovery.run_file(file.path(), Mode::Streaming).unwrap(),
        Outcome::Found(b"hashgoat".to_vec())
    );
}

#[test]
fn test_latin1_line_found_in_both_modes() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"alpha\ncaf\xe9\nomega\n").unwrap();
    file.flush().unwrap();

    // md5(b"caf\xe9")
    let recovery = Recovery::new(Algorithm::Md5.digester(), "961f50f6282239d09e48f812c1ca7276");
    let modes =
        [Mode::Bulk { workers: workers(1) }, Mode::Bulk { workers: workers(3) }, Mode::Streaming];
    for mode in modes {
        let outcome = recovery.run_file(file.path(), mode).unwrap();
        assert_eq!(outcome, Outcome::Found(b"caf\xe9".to_vec()), "{mode:?}");
    }

    assert_eq!(read_lines(file.path()).unwrap()[1], b"caf\xe9");
}

#[test]
fn test_missing_wordlist_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");
    let recovery = Recovery::new(Algorithm::Md5.digester(), "dac0d8a5cf48040d1bb724ea18a4f103");

    let err = recovery.run_file(&missing, Mode::Streaming).unwrap_err();
    assert!(matches!(err, Error::Open { ref path, .. } if *path == missing));
    assert!(err.to_string().contains("missing.txt"));

    assert!(matches!(read_lines(&missing), Err(Error::Open { .. })));
}

#[test]
fn test_free_functions() {
    let lines = vec![b"a".to_vec(), b"b".to_vec(), b"hashgoat".to_vec()];
    let md5 = Algorithm::Md5.digester();
    let target = "dac0d8a5cf48040d1bb724ea18a4f103";

    let expected = Outcome::Found(b"hashgoat".to_vec());

    assert_eq!(recover_bulk(&lines, workers(2), md5, target), expected);

    let stream = LineStream::new(io::Cursor::new(b"a\nb\nhashgoat\n".to_vec()));
    assert_eq!(recover_streaming(stream, md5, target).unwrap(), expected);
}

#[test]
fn test_multiple_matching_lines_bulk() {
    let matching = [b"HashGoat".to_vec(), b"hashgoat".to_vec(), b"HASHGOAT".to_vec()];
    let mut lines: Vec<Vec<u8>> = (0..500).map(|i| format!("w{i}").into_bytes()).collect();
    lines[3] = matching[0].clone();
    lines[250] = matching[1].clone();
    lines[499] = matching[2].clone();

    for w in [1, 2, 3, 8, 32] {
        let outcome =
            recover_bulk(&lines, workers(w), &CaseFolding, "dac0d8a5cf48040d1bb724ea18a4f103");
        let plaintext = outcome.into_plaintext().unwrap();
        assert!(matching.contains(&plaintext), "workers={w}: {plaintext:?}");
    }
}

#[test]
fn test_multiple_matching_lines_streaming_takes_the_first() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"w0\nw1\nHashGoat\nw3\nhashgoat\nHASHGOAT\n").unwrap();
    file.flush().unwrap();

    let recovery = Recovery::new(&CaseFolding, "dac0d8a5cf48040d1bb724ea18a4f103");
    assert_eq!(
        recovery.run_file(file.path(), Mode::Streaming).unwrap(),
        Outcome::Found(b"HashGoat".to_vec())
    );
}

#[cfg(feature = "tokio")]
mod async_api {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU64, Ordering};

    use hashgoat_core::recover_file_async;

    use super::*;

    #[tokio::test]
    async fn test_recover_file_async() {
        let file = wordlist_file(&["a", "b", "test_sha1", "d"]);
        let progress = Arc::new(AtomicU64::new(0));

        let outcome = recover_file_async(
            file.path(),
            Algorithm::Sha1,
            "9db4507552981975bccac89a41dab2cc821bff2e",
            Mode::Streaming,
            Some(Arc::clone(&progress)),
        )
        .await
        .unwrap();

        assert_eq!(outcome, Outcome::Found(b"test_sha1".to_vec()));
        assert!(progress.load(Ordering::Relaxed) >= 3);
    }

    #[tokio::test]
    async fn test_recover_file_async_missing() {
        let result = recover_file_async(
            "/nonexistent/hashgoat/words.txt",
            Algorithm::Md5,
            "dac0d8a5cf48040d1bb724ea18a4f103",
            Mode::Bulk { workers: workers(2) },
            None,
        )
        .await;
        assert!(matches!(result, Err(Error::Open { .. })));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn worker_count_never_changes_the_outcome(
        words in prop::collection::vec(prop::collection::vec(any::<u8>(), 1..6), 0..40),
        pick in any::<prop::sample::Index>(),
        present in any::<bool>(),
        w in 1usize..16,
    ) {
        let md5 = Algorithm::Md5.digester();
        let target = if present && !words.is_empty() {
            md5.digest(&words[pick.index(words.len())])
        } else {
            // Uppercase, so never an md5 digest.
            "NOT-A-DIGEST".to_string()
        };

        let bulk = recover_bulk(&words, workers(w), md5, &target);
        let streaming =
            recover_streaming(words.iter().cloned().map(Ok::<_, io::Error>), md5, &target).unwrap();

        match &bulk {
            Outcome::Found(p) => prop_assert_eq!(md5.digest(p), target.clone()),
            Outcome::NotFound => prop_assert!(!(present && !words.is_empty())),
        }
        prop_assert_eq!(bulk.is_found(), streaming.is_found());
        if let Outcome::Found(p) = &streaming {
            prop_assert_eq!(md5.digest(p), target.clone());
            prop_assert!(words.contains(p));
        }
    }
}
