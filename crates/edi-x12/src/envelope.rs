//! X12 envelope handling (ISA/IEA, GS/GE, ST/SE)
//!
//! A [`TransactionSet`] wraps built body segments in a single interchange
//! containing one functional group and one transaction set. Header values
//! come from the [`Context`]; trailer counts are computed.

use crate::context::{Context, MAX_CONTROL_NUMBER};
use crate::segment::Segment;
use crate::segments::{GeBuilder, GsBuilder, IeaBuilder, IsaBuilder, SeBuilder, StBuilder};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

const ENVELOPE_SEGMENTS: [&str; 6] = ["ISA", "GS", "ST", "SE", "GE", "IEA"];

/// Body segments of one transaction set awaiting their envelope
#[derive(Debug, Clone)]
pub struct TransactionSet {
    context: Arc<Context>,
    body: Vec<Segment>,
}

impl TransactionSet {
    pub fn new(context: Context) -> Self {
        Self {
            context: Arc::new(context),
            body: Vec::new(),
        }
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn body(&self) -> &[Segment] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Append a body segment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Envelope`] for envelope segments, which are generated.
    pub fn push(&mut self, segment: Segment) -> Result<&mut Self> {
        let id = segment.segment_identifier();
        if ENVELOPE_SEGMENTS.contains(&id) {
            return Err(Error::Envelope(format!(
                "{id} is generated by the envelope and cannot be added to the body"
            )));
        }
        self.body.push(segment);
        Ok(self)
    }

    /// Append several body segments.
    ///
    /// # Errors
    ///
    /// Fails on the first envelope segment, leaving earlier ones appended.
    pub fn extend(&mut self, segments: impl IntoIterator<Item = Segment>) -> Result<&mut Self> {
        for segment in segments {
            self.push(segment)?;
        }
        Ok(self)
    }

    /// Build the header and trailer segments around the body.
    ///
    /// # Errors
    ///
    /// Returns the first header or trailer validation failure (for example a
    /// context without sender or receiver), or an envelope consistency error.
    pub fn assemble(self) -> Result<Envelope> {
        let context = self.context;

        let isa = IsaBuilder::with_context(&context).build()?;
        let gs = GsBuilder::with_context(&context).build()?;
        let st = StBuilder::with_context(&context).build()?;

        let mut se = SeBuilder::transaction_set_trailer(Some(&context))?;
        se.segment_count((self.body.len() + 2).to_string())?;
        let se = se.build()?;

        let mut ge = GeBuilder::functional_group_trailer(Some(&context))?;
        ge.transaction_set_count("1")?;
        let ge = ge.build()?;

        let mut iea = IeaBuilder::interchange_trailer(Some(&context))?;
        iea.functional_group_count("1")?;
        let iea = iea.build()?;

        let mut envelope = Envelope {
            isa,
            gs,
            st,
            body: self.body,
            se,
            ge,
            iea,
        };
        envelope.attach_context(&context);
        validate_envelope(&envelope)?;

        tracing::debug!(
            control_number = context.interchange_control_number(),
            body_segments = envelope.body.len(),
            "envelope assembled"
        );
        Ok(envelope)
    }
}

/// A complete interchange with one group and one transaction set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub isa: Segment,
    pub gs: Segment,
    pub st: Segment,
    pub body: Vec<Segment>,
    pub se: Segment,
    pub ge: Segment,
    pub iea: Segment,
}

impl Envelope {
    /// Every segment in wire order
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        [&self.isa, &self.gs, &self.st]
            .into_iter()
            .chain(&self.body)
            .chain([&self.se, &self.ge, &self.iea])
    }

    pub fn into_segments(self) -> Vec<Segment> {
        let mut segments = Vec::with_capacity(self.body.len() + 6);
        segments.extend([self.isa, self.gs, self.st]);
        segments.extend(self.body);
        segments.extend([self.se, self.ge, self.iea]);
        segments
    }

    /// Attach one context to every segment.
    pub fn attach_context(&mut self, context: &Arc<Context>) {
        for segment in [
            &mut self.isa,
            &mut self.gs,
            &mut self.st,
            &mut self.se,
            &mut self.ge,
            &mut self.iea,
        ] {
            segment.attach_context(Arc::clone(context));
        }
        for segment in &mut self.body {
            segment.attach_context(Arc::clone(context));
        }
    }

    /// Render every segment with its attached context.
    ///
    /// # Errors
    ///
    /// Fails when a segment has no context attached.
    pub fn render(&self) -> Result<String> {
        self.segments()
            .map(Segment::render)
            .collect::<Result<Vec<_>>>()
            .map(|lines| lines.concat())
    }
}

fn expect_id(segment: &Segment, expected: &str) -> Result<()> {
    let id = segment.segment_identifier();
    if id == expected {
        Ok(())
    } else {
        Err(Error::Envelope(format!("Expected {expected} segment, found {id}")))
    }
}

fn value_at<'a>(segment: &'a Segment, position: usize) -> &'a str {
    segment.value(position).unwrap_or_default().trim()
}

/// Validate header/trailer consistency of an envelope
///
/// # Errors
///
/// Returns [`Error::Envelope`] naming the first mismatch.
pub fn validate_envelope(envelope: &Envelope) -> Result<()> {
    for (segment, id) in [
        (&envelope.isa, "ISA"),
        (&envelope.gs, "GS"),
        (&envelope.st, "ST"),
        (&envelope.se, "SE"),
        (&envelope.ge, "GE"),
        (&envelope.iea, "IEA"),
    ] {
        expect_id(segment, id)?;
    }

    let st_ref = value_at(&envelope.st, 2);
    let se_ref = value_at(&envelope.se, 2);
    if st_ref != se_ref {
        return Err(Error::Envelope(format!(
            "Transaction set control number mismatch: ST='{st_ref}', SE='{se_ref}'"
        )));
    }

    let expected_count = envelope.body.len() + 2;
    let declared = value_at(&envelope.se, 1);
    if declared.parse::<usize>().ok() != Some(expected_count) {
        return Err(Error::Envelope(format!(
            "Segment count mismatch: SE says {declared}, actual count is {expected_count} (including ST/SE)"
        )));
    }

    let gs_ref = value_at(&envelope.gs, 6);
    let ge_ref = value_at(&envelope.ge, 2);
    if gs_ref != ge_ref {
        return Err(Error::Envelope(format!(
            "Group control number mismatch: GS='{gs_ref}', GE='{ge_ref}'"
        )));
    }
    let sets = value_at(&envelope.ge, 1);
    if sets != "1" {
        return Err(Error::Envelope(format!(
            "Transaction set count mismatch: GE says {sets}, actual count is 1"
        )));
    }

    let isa_ref = value_at(&envelope.isa, 13);
    let iea_ref = value_at(&envelope.iea, 2);
    if isa_ref != iea_ref {
        return Err(Error::Envelope(format!(
            "Interchange control number mismatch: ISA='{isa_ref}', IEA='{iea_ref}'"
        )));
    }
    let groups = value_at(&envelope.iea, 1);
    if groups != "1" {
        return Err(Error::Envelope(format!(
            "Functional group count mismatch: IEA says {groups}, actual count is 1"
        )));
    }

    Ok(())
}

// ============================================================================
// Control Number Management
// ============================================================================

/// Trait for generating control numbers
pub trait ControlNumberGenerator: Send + Sync {
    /// Next ISA13/IEA02 value
    fn next_interchange(&self) -> Result<u32>;
    /// Next GS06/GE02 value
    fn next_group(&self) -> Result<u32>;
    /// Next ST02/SE02 value
    fn next_transaction_set(&self) -> Result<u32>;
    /// Reset counters for testing
    fn reset(&self) -> Result<()>;

    /// Draw fresh numbers for every envelope level into `context`.
    fn stamp(&self, context: &mut Context) -> Result<()> {
        context.set_interchange_control_number(self.next_interchange()?)?;
        context.set_group_control_number(self.next_group()?);
        context.set_transaction_set_control_number(self.next_transaction_set()?);
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct ControlNumberState {
    interchange: u32,
    group: u32,
    transaction_set: u32,
}

fn advance(counter: &mut u32, level: &str) -> Result<u32> {
    if *counter >= MAX_CONTROL_NUMBER {
        return Err(Error::Envelope(format!("{level} control numbers exhausted")));
    }
    *counter += 1;
    Ok(*counter)
}

fn lock(state: &Mutex<ControlNumberState>) -> Result<std::sync::MutexGuard<'_, ControlNumberState>> {
    state
        .lock()
        .map_err(|_| Error::Envelope("Failed to lock state".to_string()))
}

/// Memory-based control number generator
#[derive(Debug, Default)]
pub struct MemoryControlNumberGenerator {
    state: Arc<Mutex<ControlNumberState>>,
}

impl MemoryControlNumberGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the interchange sequence after `last`.
    pub fn starting_after(last: u32) -> Self {
        Self {
            state: Arc::new(Mutex::new(ControlNumberState {
                interchange: last,
                ..ControlNumberState::default()
            })),
        }
    }
}

impl ControlNumberGenerator for MemoryControlNumberGenerator {
    fn next_interchange(&self) -> Result<u32> {
        advance(&mut lock(&self.state)?.interchange, "Interchange")
    }

    fn next_group(&self) -> Result<u32> {
        advance(&mut lock(&self.state)?.group, "Group")
    }

    fn next_transaction_set(&self) -> Result<u32> {
        advance(&mut lock(&self.state)?.transaction_set, "Transaction set")
    }

    fn reset(&self) -> Result<()> {
        *lock(&self.state)? = ControlNumberState::default();
        Ok(())
    }
}

/// File-based control number generator that persists sequences as JSON
#[derive(Debug)]
pub struct FileControlNumberGenerator {
    path: PathBuf,
    state: Mutex<ControlNumberState>,
}

impl FileControlNumberGenerator {
    /// Open a generator, continuing from the file's sequences when it exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be read and
    /// [`Error::Parse`] when it does not hold generator state.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let state = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            serde_json::from_str(&contents)
                .map_err(|e| Error::Parse(format!("{}: {e}", path.display())))?
        } else {
            ControlNumberState::default()
        };
        Ok(Self {
            path,
            state: Mutex::new(state),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist current state to disk
    pub fn save(&self) -> Result<()> {
        let state = *lock(&self.state)?;
        self.write(&state)
    }

    fn write(&self, state: &ControlNumberState) -> Result<()> {
        let json = serde_json::to_string_pretty(state)
            .map_err(|e| Error::Serialization(e.to_string()))?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn next(&self, pick: fn(&mut ControlNumberState) -> (&mut u32, &'static str)) -> Result<u32> {
        let mut state = lock(&self.state)?;
        let (counter, level) = pick(&mut *state);
        let value = advance(counter, level)?;
        let snapshot = *state;
        drop(state);
        self.write(&snapshot)?;
        Ok(value)
    }
}

impl ControlNumberGenerator for FileControlNumberGenerator {
    fn next_interchange(&self) -> Result<u32> {
        self.next(|s| (&mut s.interchange, "Interchange"))
    }

    fn next_group(&self) -> Result<u32> {
        self.next(|s| (&mut s.group, "Group"))
    }

    fn next_transaction_set(&self) -> Result<u32> {
        self.next(|s| (&mut s.transaction_set, "Transaction set"))
    }

    fn reset(&self) -> Result<()> {
        let mut state = lock(&self.state)?;
        *state = ControlNumberState::default();
        drop(state);
        self.save()
    }
}
