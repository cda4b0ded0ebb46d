use super::model::VariantType;

// ---------------------------------------------------------------------------
// Row predicates: which report rows contribute points
// ---------------------------------------------------------------------------

/// Prefix of an all-samples, PASS-filtered, QUAL-thresholded INDEL row in a
/// vcfeval ROC report.
pub const ROC_INDEL_PREFIX: &str = "INDEL,*,*,PASS,*,QUAL";
/// Same as [`ROC_INDEL_PREFIX`] for SNP rows.
pub const ROC_SNP_PREFIX: &str = "SNP,*,*,PASS,*,QUAL";

/// Classify a raw ROC CSV line by exact prefix.
///
/// The comparison is on the raw text, not on split fields, so a line such
/// as `SNP,*,*,PASS,*,QUALITY,...` still matches.
pub fn roc_row_variant(line: &str) -> Option<VariantType> {
    if line.starts_with(ROC_INDEL_PREFIX) {
        Some(VariantType::Indel)
    } else if line.starts_with(ROC_SNP_PREFIX) {
        Some(VariantType::Snp)
    } else {
        None
    }
}

/// Classify a vcfdist precision-recall row by its exact `type` field.
pub fn tsv_row_variant(kind: &str) -> Option<VariantType> {
    match kind {
        "INDEL" => Some(VariantType::Indel),
        "SNP" => Some(VariantType::Snp),
        _ => None,
    }
}

/// vcfeval writes precision `0` for SNP thresholds with no calls; those are
/// plotted at `1`. INDEL precision is left untouched.
pub fn remap_roc_precision(variant: VariantType, precision: f64) -> f64 {
    if variant == VariantType::Snp && precision == 0.0 {
        1.0
    } else {
        precision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_lengths() {
        assert_eq!(ROC_INDEL_PREFIX.len(), 21);
        assert_eq!(ROC_SNP_PREFIX.len(), 19);
    }

    #[test]
    fn roc_prefix_matching() {
        assert_eq!(
            roc_row_variant("INDEL,*,*,PASS,*,QUAL,30,0.8,0.9"),
            Some(VariantType::Indel)
        );
        assert_eq!(
            roc_row_variant("SNP,*,*,PASS,*,QUAL,30"),
            Some(VariantType::Snp)
        );
        assert_eq!(roc_row_variant("SNP,*,*,PASS,*,QUALITY"), Some(VariantType::Snp));
        assert_eq!(roc_row_variant("SNP,*,*,NONE,*,QUAL,30"), None);
        assert_eq!(roc_row_variant("snp,*,*,PASS,*,QUAL,30"), None);
        assert_eq!(roc_row_variant(" SNP,*,*,PASS,*,QUAL,30"), None);
        assert_eq!(roc_row_variant("SNP,*,*,PASS,*,QUA"), None);
        assert_eq!(roc_row_variant(""), None);
    }

    #[test]
    fn tsv_type_matching_is_exact() {
        assert_eq!(tsv_row_variant("SNP"), Some(VariantType::Snp));
        assert_eq!(tsv_row_variant("INDEL"), Some(VariantType::Indel));
        assert_eq!(tsv_row_variant("ALL"), None);
        assert_eq!(tsv_row_variant("snp"), None);
        assert_eq!(tsv_row_variant("SNP "), None);
    }

    #[test]
    fn only_snp_zero_precision_is_remapped() {
        assert_eq!(remap_roc_precision(VariantType::Snp, 0.0), 1.0);
        assert_eq!(remap_roc_precision(VariantType::Snp, 0.5), 0.5);
        assert_eq!(remap_roc_precision(VariantType::Indel, 0.0), 0.0);
    }
}
