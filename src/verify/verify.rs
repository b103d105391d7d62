// src/verify/verify.rs
use std::{
    sync::{atomic::{AtomicUsize, Ordering}, mpsc},
    thread,
    time::Duration,
};

use crate::{
    config::consts::{JITTER_MS, REQUEST_PAUSE_MS, WORKERS},
    core::net::DocumentSource,
    engine::{self, Document, Extracted},
    error::{FetchError, StoreError, VerifyError},
    progress::Progress,
    specs,
    store::{ConfirmedRecord, RecordDraft},
};

use super::Code;

/// Per-request lifecycle. `Done` and both `FetchFailed*` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LookupState {
    Idle,
    Fetching,
    ExtractingFields,
    Done,
    FetchFailedNotFound,
    FetchFailedOther,
}

/// What a successful lookup hands back. Both fields are always filled,
/// with a real value or the not-found sentinel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extraction {
    pub code: Code,
    pub url: String,
    pub envio: Extracted,
    pub classe: Extracted,
}

impl Extraction {
    pub fn date(&self) -> &str {
        self.envio.as_str()
    }

    pub fn classification(&self) -> &str {
        self.classe.as_str()
    }
}

/// Run both field chains over the same markup.
///
/// The two chains share nothing but the input text, so the class chain runs on
/// a scoped thread while the date chain runs here. Each side parses its own DOM.
pub fn extract_fields(markup: &str) -> (Extracted, Extracted) {
    thread::scope(|s| {
        let classe = s.spawn(|| engine::extract(&Document::new(markup), &specs::CLASSE));
        let envio = engine::extract(&Document::new(markup), &specs::ENVIO);
        let classe = classe.join().unwrap_or_else(|_| {
            loge!("Extract: classe worker panicked; using sentinel");
            Extracted::not_found()
        });
        (envio, classe)
    })
}

pub struct Verifier<S: DocumentSource> {
    source: S,
}

impl<S: DocumentSource> Verifier<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Check the code, fetch its page, extract both fields.
    ///
    /// Shape errors return before any fetch. Fetch errors never carry a
    /// partial result. Missing fields are not errors.
    pub fn lookup(&self, raw_code: &str) -> Result<Extraction, VerifyError> {
        let code = Code::parse(raw_code).inspect_err(|_| {
            logd!("Lookup: rejected {:?} (bad shape)", raw_code);
        })?;

        let url = self.source.locate(&code);
        let state = step(&code, LookupState::Idle, LookupState::Fetching);

        let body = match self.source.fetch(&code) {
            Ok(body) => body,
            Err(FetchError::NotFound) => {
                step(&code, state, LookupState::FetchFailedNotFound);
                return Err(VerifyError::DocumentNotFound(url));
            }
            Err(FetchError::Unavailable(msg)) => {
                step(&code, state, LookupState::FetchFailedOther);
                loge!("Lookup: {} source error: {}", code, msg);
                return Err(VerifyError::SourceUnavailable(msg));
            }
        };

        let state = step(&code, state, LookupState::ExtractingFields);
        let (envio, classe) = extract_fields(&body);
        step(&code, state, LookupState::Done);

        logf!(
            "Lookup: {} envio={:?} ({}) classe={:?} ({})",
            code,
            envio.value,
            stage_label(&envio),
            classe.value,
            stage_label(&classe)
        );

        Ok(Extraction { code, url, envio, classe })
    }

    /// Turn a reviewed lookup into a record ready for the store.
    ///
    /// `envio`/`classe` replace the extracted values when given; the value
    /// column gets the placeholder. Unknown `status` text is rejected.
    pub fn confirm(
        &self,
        x: &Extraction,
        envio: Option<&str>,
        classe: Option<&str>,
        status: &str,
    ) -> Result<ConfirmedRecord, StoreError> {
        let record = RecordDraft::from_extraction(x, status)
            .with_corrections(envio, classe)
            .validate()?;
        logd!(
            "Confirm: {} envio={:?} classe={:?} status={}",
            record.code,
            record.envio,
            record.classe,
            record.status_label()
        );
        Ok(record)
    }

    /// Look up many codes on a small worker pool.
    /// Results come back in input order, one per code.
    pub fn lookup_many(
        &self,
        codes: &[String],
        mut progress: Option<&mut dyn Progress>,
    ) -> Vec<(String, Result<Extraction, VerifyError>)> {
        if let Some(p) = progress.as_deref_mut() {
            p.begin(codes.len());
        }

        let mut slots: Vec<Option<Result<Extraction, VerifyError>>> =
            (0..codes.len()).map(|_| None).collect();

        let counter = AtomicUsize::new(0);
        let (res_tx, res_rx) = mpsc::channel::<(usize, Result<Extraction, VerifyError>)>();
        let workers = WORKERS.min(codes.len()).max(1);

        thread::scope(|s| {
            for _ in 0..workers {
                let tx = res_tx.clone();
                let idx = &counter;
                s.spawn(move || loop {
                    let i = idx.fetch_add(1, Ordering::Relaxed);
                    if i >= codes.len() {
                        break;
                    }
                    let result = self.lookup(&codes[i]);
                    let hit_remote = !matches!(result, Err(VerifyError::InvalidIdentifier(_)));
                    if tx.send((i, result)).is_err() {
                        break;
                    }
                    if hit_remote {
                        let jitter = (i as u64 * 17) % JITTER_MS;
                        thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS + jitter)); // be polite
                    }
                });
            }
            drop(res_tx); // this thread is the sole receiver now

            for (i, result) in res_rx {
                if let Some(p) = progress.as_deref_mut() {
                    match &result {
                        Ok(_) => p.item_done(&codes[i]),
                        Err(e) => p.item_failed(&codes[i], &e.to_string()),
                    }
                }
                slots[i] = Some(result);
            }
        });

        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }

        codes
            .iter()
            .cloned()
            .zip(slots)
            .map(|(code, slot)| {
                let result = slot.unwrap_or_else(|| {
                    Err(VerifyError::SourceUnavailable(s!("worker ended early")))
                });
                (code, result)
            })
            .collect()
    }
}

fn step(code: &Code, from: LookupState, to: LookupState) -> LookupState {
    logd!("Lookup: {} {:?} → {:?}", code, from, to);
    to
}

fn stage_label(e: &Extracted) -> String {
    e.stage.map_or_else(|| s!("miss"), |st| st.to_string())
}
