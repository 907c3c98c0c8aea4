// src/pipeline.rs
//
// document → Transcript → GwaReport, for one document or a batch.
// Each document is processed start to finish by one worker with its own
// data; nothing is shared between documents except the read-only options.

use std::{
    path::{Path, PathBuf},
    sync::{mpsc, Arc, atomic::{AtomicUsize, Ordering}},
    thread,
};

use crate::{
    config::{consts::WORKERS, options::AppOptions},
    error::TranscriptError,
    file,
    gwa::{self, GwaReport},
    progress::Progress,
    record::StudentInfo,
    specs::transcript::{self, Transcript},
};

/// Both outputs the presentation layer consumes.
#[derive(Clone, Debug, PartialEq)]
pub struct Analysis {
    pub info: StudentInfo,
    pub report: GwaReport,
}

impl Analysis {
    /// Empty record set: show "no grades found", don't treat as an error.
    pub fn has_grades(&self) -> bool {
        !self.report.records.is_empty()
    }
}

pub fn analyze(transcript: Transcript, opts: &AppOptions) -> Analysis {
    let report = gwa::aggregate_with(&transcript.records, &opts.aggregate);
    Analysis { info: transcript.info, report }
}

/// Extract + aggregate an in-memory document.
pub fn process_bytes(bytes: &[u8], opts: &AppOptions) -> Result<Analysis, TranscriptError> {
    let transcript = transcript::extract_bytes(bytes, &opts.extract)?;
    Ok(analyze(transcript, opts))
}

pub fn process_file(path: &Path, opts: &AppOptions) -> Result<Analysis, TranscriptError> {
    let bytes = file::read_document(path)?;
    process_bytes(&bytes, opts)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Process several files on a small worker pool.
/// Results come back in input order; a failing file doesn't stop the rest.
pub fn process_files(
    paths: &[PathBuf],
    opts: &AppOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Vec<(PathBuf, Result<Analysis, TranscriptError>)> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(paths.len());
    }

    type Done = (usize, Result<Analysis, TranscriptError>);

    let paths_arc = Arc::new(paths.to_vec());
    let opts_arc = Arc::new(opts.clone());
    let counter = Arc::new(AtomicUsize::new(0));
    let (res_tx, res_rx) = mpsc::channel::<Done>();

    let workers = WORKERS.min(paths.len()).max(1);

    // Spawn workers
    for _ in 0..workers {
        let paths = Arc::clone(&paths_arc);
        let opts = Arc::clone(&opts_arc);
        let idx = Arc::clone(&counter);
        let tx = res_tx.clone();

        thread::spawn(move || {
            loop {
                let i = idx.fetch_add(1, Ordering::Relaxed);
                if i >= paths.len() {
                    break;
                }
                let result = process_file(&paths[i], &opts);
                let _ = tx.send((i, result));
            }
        });
    }
    drop(res_tx); // main thread is sole receiver now

    // Aggregate results
    let mut slots: Vec<Option<Result<Analysis, TranscriptError>>> =
        (0..paths.len()).map(|_| None).collect();

    for _ in 0..paths.len() {
        match res_rx.recv() {
            Ok((i, result)) => {
                let name = display_name(&paths[i]);
                match &result {
                    Ok(_) => {
                        if let Some(p) = progress.as_deref_mut() {
                            p.item_done(i, &name);
                        }
                    }
                    Err(e) => {
                        loge!("{name}: {e}");
                        if let Some(p) = progress.as_deref_mut() {
                            p.item_failed(i, &name);
                            p.log(&format!("{name}: {e}"));
                        }
                    }
                }
                slots[i] = Some(result);
            }
            Err(_) => break, // workers ended early; bail gracefully
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    paths
        .iter()
        .cloned()
        .zip(slots)
        .filter_map(|(path, slot)| slot.map(|r| (path, r)))
        .collect()
}
