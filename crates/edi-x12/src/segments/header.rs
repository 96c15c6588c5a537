//! Transaction set header segments: BGN, DTP and the N1 party loop

use crate::spec::{ContextValue, ElementSpec, Profile, Rule, SegmentSpec};
use edi_x12_codes::{
    ActionCode, DateTimePeriodFormatQualifier, DateTimeQualifier, EntityIdentifierCode,
    IdentificationCodeQualifier, TimeCode, TransactionSetPurposeCode,
};

/// Beginning segment
pub static BGN: SegmentSpec = SegmentSpec {
    id: "BGN",
    name: "Beginning Segment",
    elements: &[
        ElementSpec::coded::<TransactionSetPurposeCode>(1, "purpose_code", "Transaction Set Purpose Code")
            .required(),
        ElementSpec::text(2, "reference_id", "Reference Identification")
            .required()
            .max(80),
        ElementSpec::text(3, "date", "Date")
            .required()
            .exactly(8)
            .from_context(ContextValue::Date),
        ElementSpec::text(4, "time", "Time")
            .min(4)
            .max(8)
            .from_context(ContextValue::Time),
        ElementSpec::coded::<TimeCode>(5, "time_code", "Time Code"),
        ElementSpec::text(6, "original_reference_id", "Reference Identification").max(80),
        ElementSpec::text(7, "transaction_type_code", "Transaction Type Code"),
        ElementSpec::coded::<ActionCode>(8, "action_code", "Action Code"),
    ],
    rules: &[],
};

/// Date or time period
pub static DTP: SegmentSpec = SegmentSpec {
    id: "DTP",
    name: "Date or Time or Period",
    elements: &[
        ElementSpec::coded::<DateTimeQualifier>(1, "qualifier", "Date/Time Qualifier").required(),
        ElementSpec::coded::<DateTimePeriodFormatQualifier>(
            2,
            "format",
            "Date Time Period Format Qualifier",
        )
        .required()
        .default_value("D8"),
        ElementSpec::text(3, "period", "Date Time Period")
            .required()
            .max(35),
    ],
    rules: &[],
};

/// Party identification
pub static N1: SegmentSpec = SegmentSpec {
    id: "N1",
    name: "Party Identification",
    elements: &[
        ElementSpec::coded::<EntityIdentifierCode>(1, "entity_id", "Entity Identifier Code").required(),
        ElementSpec::text(2, "name", "Name").max(60),
        ElementSpec::coded::<IdentificationCodeQualifier>(
            3,
            "id_qualifier",
            "Identification Code Qualifier",
        ),
        ElementSpec::text(4, "id_code", "Identification Code"),
    ],
    rules: &[Rule::AtLeastOne(&[2, 3])],
};

/// File effective date (`DTP*007`)
pub static DTP_FILE_EFFECTIVE_DATE: Profile = Profile {
    name: "file_effective_date",
    segment: &DTP,
    presets: &[(1, "007"), (2, "D8")],
    rules: &[],
};

/// Member benefit begin date (`DTP*348`)
pub static DTP_BENEFIT_BEGIN: Profile = Profile {
    name: "benefit_begin",
    segment: &DTP,
    presets: &[(1, "348"), (2, "D8")],
    rules: &[],
};

/// Sponsor name (`N1*P5`)
pub static N1_PLAN_SPONSOR: Profile = Profile {
    name: "plan_sponsor",
    segment: &N1,
    presets: &[(1, "P5")],
    rules: &[Rule::Required(2)],
};

/// Payer (`N1*IN`)
pub static N1_PAYER: Profile = Profile {
    name: "payer",
    segment: &N1,
    presets: &[(1, "IN")],
    rules: &[Rule::Required(2)],
};

/// Any party identified by code; qualifier and code travel together
pub static N1_IDENTIFIED_PARTY: Profile = Profile {
    name: "identified_party",
    segment: &N1,
    presets: &[],
    rules: &[Rule::Paired(&[3, 4])],
};

typed_builder! {
    /// Builder for `BGN`
    BgnBuilder for BGN {
        1 => purpose_code: TransactionSetPurposeCode,
        2 => reference_id,
        3 => date,
        4 => time,
        5 => time_code: TimeCode,
        6 => original_reference_id,
        7 => transaction_type_code,
        8 => action_code: ActionCode,
    }
}

typed_builder! {
    /// Builder for `DTP`
    DtpBuilder for DTP {
        1 => qualifier: DateTimeQualifier,
        2 => format: DateTimePeriodFormatQualifier,
        3 => period,
    }
}

typed_builder! {
    /// Builder for `N1`
    N1Builder for N1 {
        1 => entity_id: EntityIdentifierCode,
        2 => name,
        3 => id_qualifier: IdentificationCodeQualifier,
        4 => id_code,
    }
}

impl DtpBuilder {
    pub fn file_effective_date() -> crate::Result<Self> {
        Self::for_profile(&DTP_FILE_EFFECTIVE_DATE, None)
    }

    pub fn benefit_begin() -> crate::Result<Self> {
        Self::for_profile(&DTP_BENEFIT_BEGIN, None)
    }

    /// Set the period from a date, formatted `CCYYMMDD`.
    pub fn date(&mut self, date: chrono::NaiveDate) -> crate::Result<&mut Self> {
        self.format(DateTimePeriodFormatQualifier::Date)?;
        self.period(date.format("%Y%m%d").to_string())
    }
}

impl N1Builder {
    pub fn plan_sponsor() -> crate::Result<Self> {
        Self::for_profile(&N1_PLAN_SPONSOR, None)
    }

    pub fn payer() -> crate::Result<Self> {
        Self::for_profile(&N1_PAYER, None)
    }

    pub fn identified_party() -> crate::Result<Self> {
        Self::for_profile(&N1_IDENTIFIED_PARTY, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Context, Error};
    use chrono::NaiveDate;

    #[test]
    fn test_bgn_missing_reference() {
        let mut bgn = BgnBuilder::new();
        bgn.purpose_code("00").unwrap().date("20230801").unwrap();
        let err = bgn.build().unwrap_err();
        assert!(err.to_string().contains("BGN02"));
        assert_eq!(err.to_string(), "BGN02 (Reference Identification) is required");
    }

    #[test]
    fn test_bgn_full() {
        let at = NaiveDate::from_ymd_opt(2023, 8, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let mut bgn = BgnBuilder::with_context(&Context::at(at));
        bgn.purpose_code(TransactionSetPurposeCode::Original)
            .unwrap()
            .reference_id("REF-0001")
            .unwrap()
            .time_code("eastern time")
            .unwrap()
            .action_code("verify")
            .unwrap();
        let segment = bgn.build().unwrap();
        assert_eq!(segment.to_string(), "BGN*00*REF-0001*20230801*0930*ET***4~");
    }

    #[test]
    fn test_bgn_reference_too_long() {
        let mut bgn = BgnBuilder::new();
        bgn.purpose_code("00").unwrap();
        bgn.reference_id("X".repeat(81)).unwrap();
        bgn.date("20230801").unwrap();
        let err = bgn.build().unwrap_err();
        assert_eq!(
            err.to_string(),
            "BGN02 (Reference Identification) must be at most 80 characters (got 81)"
        );
    }

    #[test]
    fn test_dtp_profiles() {
        let mut dtp = DtpBuilder::benefit_begin().unwrap();
        dtp.date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()).unwrap();
        assert_eq!(dtp.build().unwrap().to_string(), "DTP*348*D8*20240101~");

        let mut dtp = DtpBuilder::file_effective_date().unwrap();
        dtp.period("20240101").unwrap();
        assert_eq!(dtp.build().unwrap().to_string(), "DTP*007*D8*20240101~");
    }

    #[test]
    fn test_dtp_period_too_long() {
        let mut dtp = DtpBuilder::new();
        dtp.qualifier("benefit begin").unwrap();
        dtp.period("2".repeat(36)).unwrap();
        assert!(dtp.build().unwrap_err().to_string().starts_with("DTP03"));
    }

    #[test]
    fn test_n1_requires_name_or_qualifier() {
        let mut n1 = N1Builder::new();
        n1.entity_id("P5").unwrap();
        let err = n1.build().unwrap_err();
        assert!(matches!(err, Error::CrossField { segment: "N1", .. }));
        assert_eq!(
            err.to_string(),
            "N1: at least one of N102 (Name) and N103 (Identification Code Qualifier) must be present"
        );
    }

    #[test]
    fn test_n1_qualifier_alone_is_valid() {
        let mut n1 = N1Builder::new();
        n1.entity_id("IN").unwrap().id_qualifier("FI").unwrap();
        assert_eq!(n1.build().unwrap().to_string(), "N1*IN**FI~");
    }

    #[test]
    fn test_identified_party_pairs_qualifier_and_code() {
        let mut n1 = N1Builder::identified_party().unwrap();
        n1.entity_id("IN").unwrap().id_qualifier("FI").unwrap();
        let err = n1.build().unwrap_err();
        assert!(matches!(err, Error::CrossField { segment: "N1", .. }));
        assert!(err.to_string().contains("must be used together"));

        let mut n1 = N1Builder::identified_party().unwrap();
        n1.entity_id("IN")
            .unwrap()
            .id_qualifier("ein")
            .unwrap()
            .id_code("123456789")
            .unwrap();
        assert_eq!(n1.build().unwrap().to_string(), "N1*IN**24*123456789~");
    }

    #[test]
    fn test_n1_name_length() {
        let mut n1 = N1Builder::plan_sponsor().unwrap();
        n1.name("N".repeat(61)).unwrap();
        assert_eq!(n1.build().unwrap_err().reference(), Some("N102"));
    }

    #[test]
    fn test_plan_sponsor_requires_name() {
        let mut n1 = N1Builder::plan_sponsor().unwrap();
        n1.id_qualifier("FI").unwrap().id_code("123456789").unwrap();
        let err = n1.build().unwrap_err();
        assert_eq!(err.to_string(), "N102 (Name) is required");

        let mut n1 = N1Builder::plan_sponsor().unwrap();
        n1.name("ACME CORP").unwrap();
        assert_eq!(n1.build().unwrap().to_string(), "N1*P5*ACME CORP~");
    }
}
