use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::Path;

use anyhow::{Context, Result, bail};

use phasepair_core::models::{GenotypeCall, VariantId};
use phasepair_core::utils::get_dynamic_reader;

/// Heterozygous variants per sample, in input order. The ordered map keeps
/// sample iteration deterministic so repeated runs emit identical output.
pub type SampleVariants = BTreeMap<String, Vec<VariantId>>;

///
/// Read a genotype table: whitespace-delimited `sample variant genotype`
/// lines, plain or gzipped, e.g. `Sample1 chr21:12314:C:T 1|0`.
///
/// Malformed lines are reported and skipped; only heterozygous calls are
/// retained.
///
pub fn read_genotype_table(path: &Path) -> Result<SampleVariants> {
    let reader = get_dynamic_reader(path)?;
    let mut variants = SampleVariants::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {} of {:?}", index + 1, path))?;
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split_whitespace();
        let (Some(sample), Some(variant), Some(genotype)) =
            (fields.next(), fields.next(), fields.next())
        else {
            eprintln!(
                "Warning: skipping genotype line {} with fewer than three fields: {}",
                index + 1,
                line
            );
            continue;
        };

        let call: GenotypeCall = match genotype.parse() {
            Ok(call) => call,
            Err(e) => {
                eprintln!("Warning: skipping genotype line {}: {}", index + 1, e);
                continue;
            }
        };
        if !call.is_heterozygous() {
            continue;
        }

        let variant: VariantId = match variant.parse() {
            Ok(variant) => variant,
            Err(e) => {
                eprintln!("Warning: skipping genotype line {}: {}", index + 1, e);
                continue;
            }
        };

        variants.entry(sample.to_string()).or_default().push(variant);
    }

    Ok(variants)
}

///
/// Read a VCF with genotypes, plain or bgzip/gzip-compressed. Sample names
/// come from the `#CHROM` header line; each record contributes its first
/// alternate allele as the variant identity, and every sample whose `GT`
/// field decodes to a heterozygous call collects that variant.
///
pub fn read_vcf(path: &Path) -> Result<SampleVariants> {
    let reader = get_dynamic_reader(path)?;
    let mut samples: Option<Vec<String>> = None;
    let mut variants = SampleVariants::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {} of {:?}", index + 1, path))?;

        if line.starts_with("##") || line.trim().is_empty() {
            continue;
        }
        if line.starts_with('#') {
            if line.starts_with("#CHROM") {
                // #CHROM POS ID REF ALT QUAL FILTER INFO FORMAT sample...
                let columns: Vec<&str> = line.split('\t').collect();
                samples = Some(columns.iter().skip(9).map(|s| s.to_string()).collect());
            }
            continue;
        }

        let Some(samples) = samples.as_deref() else {
            bail!("VCF {:?} has a data line before the #CHROM header line", path);
        };

        if let Some((variant, calls)) = parse_vcf_record(&line, samples, index + 1) {
            for (sample, call) in calls {
                if call.is_heterozygous() {
                    variants
                        .entry(sample.to_string())
                        .or_default()
                        .push(variant.clone());
                }
            }
        }
    }

    if samples.is_none() {
        bail!("VCF {:?} has no #CHROM header line", path);
    }

    Ok(variants)
}

/// Decode one VCF data line into the site's variant identity and each
/// sample's genotype call. Returns None (after a warning) for records the
/// discovery phase can't use.
fn parse_vcf_record<'a>(
    line: &str,
    samples: &'a [String],
    line_number: usize,
) -> Option<(VariantId, Vec<(&'a str, GenotypeCall)>)> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < 10 {
        eprintln!(
            "Warning: skipping VCF record at line {} with fewer than ten columns",
            line_number
        );
        return None;
    }

    let chromosome = fields[0];
    let position: u64 = match fields[1].parse() {
        Ok(position) => position,
        Err(_) => {
            eprintln!(
                "Warning: skipping VCF record at line {} with a non-numeric position: {}",
                line_number, fields[1]
            );
            return None;
        }
    };

    let reference = fields[3];
    let alternate = fields[4].split(',').next().unwrap_or(".");
    if alternate == "." || alternate.is_empty() {
        eprintln!(
            "Warning: skipping VCF record at line {} without an alternate allele",
            line_number
        );
        return None;
    }

    let Some(gt_index) = fields[8].split(':').position(|key| key == "GT") else {
        eprintln!(
            "Warning: skipping VCF record at line {} without a GT field in FORMAT",
            line_number
        );
        return None;
    };

    let variant = VariantId::new(chromosome, position, reference, alternate);

    let mut calls = Vec::with_capacity(samples.len());
    for (sample, column) in samples.iter().zip(&fields[9..]) {
        let gt = column.split(':').nth(gt_index).unwrap_or(".");
        match gt.parse::<GenotypeCall>() {
            Ok(call) => calls.push((sample.as_str(), call)),
            Err(e) => {
                eprintln!(
                    "Warning: unreadable genotype for sample {} at line {}: {}",
                    sample, line_number, e
                );
            }
        }
    }

    Some((variant, calls))
}
