use std::ffi::OsStr;
use std::fs::File;
use std::io;
use std::path::Path;

use anyhow::{Context, Result, bail};
use noodles::core::{Position, Region};
use noodles::sam::alignment::Record;
use noodles::sam::alignment::record::Sequence as _;
use noodles::{bam, bgzf, cram, fasta, sam};

///
/// The slice of an alignment record the classifier needs: the 1-based
/// reference start and the decoded base sequence.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedRead {
    pub start: u64,
    pub bases: Vec<u8>,
}

impl AlignedRead {
    pub fn new(start: u64, bases: Vec<u8>) -> Self {
        AlignedRead { start, bases }
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// The base at a 1-based reference position, if this read covers it.
    pub fn base_at(&self, position: u64) -> Option<u8> {
        if position < self.start {
            return None;
        }
        let offset = (position - self.start) as usize;
        self.bases.get(offset).copied()
    }

    pub fn covers(&self, position: u64) -> bool {
        self.base_at(position).is_some()
    }
}

enum StoreReader {
    Bam(bam::io::IndexedReader<bgzf::Reader<File>>),
    Cram(cram::io::IndexedReader<File>),
}

///
/// An indexed collection of aligned reads answering region queries.
/// BAM input needs its `.bai`/`.csi` index; CRAM input additionally needs
/// an indexed FASTA reference. Everything is validated at open time so
/// region queries only fail for unresolvable regions.
///
pub struct AlignmentStore {
    reader: StoreReader,
    header: sam::Header,
}

impl AlignmentStore {
    pub fn open(path: &Path, reference: Option<&Path>) -> Result<Self> {
        let extension = path.extension().and_then(OsStr::to_str);
        let mut reader = match extension {
            Some("bam") => {
                let reader = bam::io::indexed_reader::Builder::default()
                    .build_from_path(path)
                    .with_context(|| format!("Failed to open indexed BAM: {:?}", path))?;
                StoreReader::Bam(reader)
            }
            Some("cram") => {
                let Some(reference) = reference else {
                    bail!("CRAM input {:?} requires a reference sequence (--reference)", path);
                };
                let repository = open_reference_repository(reference)?;
                let reader = cram::io::indexed_reader::Builder::default()
                    .set_reference_sequence_repository(repository)
                    .build_from_path(path)
                    .with_context(|| format!("Failed to open indexed CRAM: {:?}", path))?;
                StoreReader::Cram(reader)
            }
            _ => bail!("Unsupported alignment file (expected .bam or .cram): {:?}", path),
        };

        let header = match &mut reader {
            StoreReader::Bam(reader) => reader.read_header(),
            StoreReader::Cram(reader) => reader.read_header(),
        }
        .with_context(|| format!("Failed to read alignment header: {:?}", path))?;

        Ok(AlignmentStore { reader, header })
    }

    /// Fetch every read overlapping the 1-based inclusive span
    /// `chromosome:start-end`. The query is drained before returning, so no
    /// iterator state survives into the next call. Unmapped records are
    /// dropped.
    pub fn query(&mut self, chromosome: &str, start: u64, end: u64) -> io::Result<Vec<AlignedRead>> {
        let start = Position::try_from(start as usize)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        let end = Position::try_from(end as usize)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        let region = Region::new(chromosome, start..=end);

        let mut reads = Vec::new();
        match &mut self.reader {
            StoreReader::Bam(reader) => {
                let query = reader.query(&self.header, &region)?;
                for result in query {
                    let record = result?;
                    if let Some(read) = aligned_read_from_record(&record)? {
                        reads.push(read);
                    }
                }
            }
            StoreReader::Cram(reader) => {
                let query = reader.query(&self.header, &region)?;
                for result in query {
                    let record = result?;
                    if let Some(read) = aligned_read_from_record(&record)? {
                        reads.push(read);
                    }
                }
            }
        }

        Ok(reads)
    }
}

fn open_reference_repository(reference: &Path) -> Result<fasta::Repository> {
    let reader = fasta::io::indexed_reader::Builder::default()
        .build_from_path(reference)
        .with_context(|| format!("Failed to open indexed reference FASTA: {:?}", reference))?;
    let adapter = fasta::repository::adapters::IndexedReader::new(reader);
    Ok(fasta::Repository::new(adapter))
}

fn aligned_read_from_record(record: &dyn Record) -> io::Result<Option<AlignedRead>> {
    let Some(start) = record.alignment_start().transpose()? else {
        return Ok(None);
    };
    let bases: Vec<u8> = record.sequence().iter().collect();
    Ok(Some(AlignedRead::new(usize::from(start) as u64, bases)))
}
