//! Member level segments
//!
//! INS opens the member loop. The remaining segments carry no rules of their
//! own; the named profiles add them for the common 834 usages.

use crate::spec::{ElementSpec, Profile, Rule, SegmentSpec};
use edi_x12_codes::{
    BenefitStatusCode, CoverageLevelCode, DateTimePeriodFormatQualifier, EmploymentStatusCode,
    EntityIdentifierCode, EntityTypeQualifier, GenderCode, IdentificationCodeQualifier,
    IndividualRelationshipCode, InsuranceLineCode, MaintenanceReasonCode, MaintenanceTypeCode,
    MaritalStatusCode, ReferenceIdentificationQualifier, StudentStatusCode, YesNoCondition,
};

/// Member level detail
pub static INS: SegmentSpec = SegmentSpec {
    id: "INS",
    name: "Member Level Detail",
    elements: &[
        ElementSpec::coded::<YesNoCondition>(1, "subscriber_indicator", "Yes/No Condition or Response Code")
            .required(),
        ElementSpec::coded::<IndividualRelationshipCode>(
            2,
            "relationship_code",
            "Individual Relationship Code",
        )
        .required(),
        ElementSpec::coded::<MaintenanceTypeCode>(3, "maintenance_type", "Maintenance Type Code")
            .required(),
        ElementSpec::coded::<MaintenanceReasonCode>(4, "maintenance_reason", "Maintenance Reason Code"),
        ElementSpec::coded::<BenefitStatusCode>(5, "benefit_status", "Benefit Status Code").required(),
        ElementSpec::text(6, "medicare_status", "Medicare Status Code"),
        ElementSpec::text(7, "cobra_qualifying_event", "Qualifying Event Code"),
        ElementSpec::coded::<EmploymentStatusCode>(8, "employment_status", "Employment Status Code"),
        ElementSpec::coded::<StudentStatusCode>(9, "student_status", "Student Status Code"),
        ElementSpec::coded::<YesNoCondition>(10, "handicap_indicator", "Yes/No Condition or Response Code"),
        ElementSpec::coded::<DateTimePeriodFormatQualifier>(
            11,
            "date_time_format",
            "Date Time Period Format Qualifier",
        ),
        ElementSpec::text(12, "death_date", "Date Time Period"),
        ElementSpec::text(13, "confidentiality_code", "Confidentiality Code"),
        ElementSpec::text(14, "city_name", "City Name"),
        ElementSpec::text(15, "state_code", "State or Province Code"),
        ElementSpec::text(16, "country_code", "Country Code"),
        ElementSpec::text(17, "birth_sequence", "Number"),
    ],
    rules: &[],
};

/// Reference information
pub static REF: SegmentSpec = SegmentSpec {
    id: "REF",
    name: "Reference Information",
    elements: &[
        ElementSpec::coded::<ReferenceIdentificationQualifier>(
            1,
            "qualifier",
            "Reference Identification Qualifier",
        ),
        ElementSpec::text(2, "reference_id", "Reference Identification"),
        ElementSpec::text(3, "description", "Description"),
    ],
    rules: &[],
};

/// Individual or organizational name
pub static NM1: SegmentSpec = SegmentSpec {
    id: "NM1",
    name: "Individual or Organizational Name",
    elements: &[
        ElementSpec::coded::<EntityIdentifierCode>(1, "entity_id", "Entity Identifier Code"),
        ElementSpec::coded::<EntityTypeQualifier>(2, "entity_type", "Entity Type Qualifier"),
        ElementSpec::text(3, "last_name", "Name Last or Organization Name"),
        ElementSpec::text(4, "first_name", "Name First"),
        ElementSpec::text(5, "middle_name", "Name Middle"),
        ElementSpec::text(6, "prefix", "Name Prefix"),
        ElementSpec::text(7, "suffix", "Name Suffix"),
        ElementSpec::coded::<IdentificationCodeQualifier>(
            8,
            "id_qualifier",
            "Identification Code Qualifier",
        ),
        ElementSpec::text(9, "id_code", "Identification Code"),
    ],
    rules: &[],
};

/// Party location
pub static N3: SegmentSpec = SegmentSpec {
    id: "N3",
    name: "Party Location",
    elements: &[
        ElementSpec::text(1, "address_line_1", "Address Information"),
        ElementSpec::text(2, "address_line_2", "Address Information"),
    ],
    rules: &[],
};

/// Geographic location
pub static N4: SegmentSpec = SegmentSpec {
    id: "N4",
    name: "Geographic Location",
    elements: &[
        ElementSpec::text(1, "city", "City Name"),
        ElementSpec::text(2, "state", "State or Province Code"),
        ElementSpec::text(3, "postal_code", "Postal Code"),
        ElementSpec::text(4, "country_code", "Country Code"),
        ElementSpec::text(5, "location_qualifier", "Location Qualifier"),
        ElementSpec::text(6, "location_id", "Location Identifier"),
        ElementSpec::text(7, "country_subdivision", "Country Subdivision Code"),
    ],
    rules: &[],
};

/// Demographic information
pub static DMG: SegmentSpec = SegmentSpec {
    id: "DMG",
    name: "Demographic Information",
    elements: &[
        ElementSpec::coded::<DateTimePeriodFormatQualifier>(
            1,
            "format",
            "Date Time Period Format Qualifier",
        )
        .default_value("D8"),
        ElementSpec::text(2, "birth_date", "Date Time Period"),
        ElementSpec::coded::<GenderCode>(3, "gender", "Gender Code"),
        ElementSpec::coded::<MaritalStatusCode>(4, "marital_status", "Marital Status Code"),
        ElementSpec::text(5, "race_ethnicity", "Composite Race or Ethnicity Information"),
        ElementSpec::text(6, "citizenship_status", "Citizenship Status Code"),
    ],
    rules: &[],
};

/// Health coverage
pub static HD: SegmentSpec = SegmentSpec {
    id: "HD",
    name: "Health Coverage",
    elements: &[
        ElementSpec::coded::<MaintenanceTypeCode>(1, "maintenance_type", "Maintenance Type Code")
            .required(),
        ElementSpec::coded::<MaintenanceReasonCode>(2, "maintenance_reason", "Maintenance Reason Code"),
        ElementSpec::coded::<InsuranceLineCode>(3, "insurance_line", "Insurance Line Code").required(),
        ElementSpec::text(4, "plan_coverage_description", "Plan Coverage Description").max(50),
        ElementSpec::coded::<CoverageLevelCode>(5, "coverage_level", "Coverage Level Code"),
    ],
    rules: &[],
};

/// Deceased member (`INS11`/`INS12` death date)
pub static INS_DECEASED_MEMBER: Profile = Profile {
    name: "deceased_member",
    segment: &INS,
    presets: &[(11, "D8")],
    rules: &[Rule::Paired(&[11, 12])],
};

const REFERENCE_REQUIRED: &[Rule] = &[Rule::Required(2)];

/// Subscriber identifier (`REF*0F`)
pub static REF_MEMBER_IDENTIFICATION_NUMBER: Profile = Profile {
    name: "member_identification_number",
    segment: &REF,
    presets: &[(1, "0F")],
    rules: REFERENCE_REQUIRED,
};

/// Group or policy number (`REF*1L`)
pub static REF_MEMBER_GROUP_POLICY_NUMBER: Profile = Profile {
    name: "member_group_policy_number",
    segment: &REF,
    presets: &[(1, "1L")],
    rules: REFERENCE_REQUIRED,
};

/// Master policy number (`REF*38`)
pub static REF_MASTER_POLICY_NUMBER: Profile = Profile {
    name: "master_policy_number",
    segment: &REF,
    presets: &[(1, "38")],
    rules: REFERENCE_REQUIRED,
};

/// Any other member identifier; the qualifier is supplied by the caller
pub static REF_MEMBER_SUPPLEMENTAL_IDENTIFIER: Profile = Profile {
    name: "member_supplemental_identifier",
    segment: &REF,
    presets: &[],
    rules: &[Rule::Required(1), Rule::Required(2)],
};

/// Subscriber or dependent name (`NM1*IL*1`)
pub static NM1_MEMBER_NAME: Profile = Profile {
    name: "member_name",
    segment: &NM1,
    presets: &[(1, "IL"), (2, "1")],
    rules: &[Rule::Required(3), Rule::Paired(&[8, 9])],
};

/// Responsible person (`NM1*QD*1`)
pub static NM1_RESPONSIBLE_PERSON: Profile = Profile {
    name: "responsible_person",
    segment: &NM1,
    presets: &[(1, "QD"), (2, "1")],
    rules: &[Rule::Required(3)],
};

pub static N3_MEMBER_RESIDENCE_STREET_ADDRESS: Profile = Profile {
    name: "member_residence_street_address",
    segment: &N3,
    presets: &[],
    rules: &[Rule::Required(1)],
};

pub static N4_MEMBER_RESIDENCE_CITY: Profile = Profile {
    name: "member_residence_city",
    segment: &N4,
    presets: &[],
    rules: &[Rule::Required(1)],
};

/// Birth date and gender (`DMG*D8`)
pub static DMG_MEMBER_DEMOGRAPHICS: Profile = Profile {
    name: "member_demographics",
    segment: &DMG,
    presets: &[(1, "D8")],
    rules: &[Rule::Required(2), Rule::Required(3)],
};

typed_builder! {
    /// Builder for `INS`
    InsBuilder for INS {
        1 => subscriber_indicator: YesNoCondition,
        2 => relationship_code: IndividualRelationshipCode,
        3 => maintenance_type: MaintenanceTypeCode,
        4 => maintenance_reason: MaintenanceReasonCode,
        5 => benefit_status: BenefitStatusCode,
        6 => medicare_status,
        7 => cobra_qualifying_event,
        8 => employment_status: EmploymentStatusCode,
        9 => student_status: StudentStatusCode,
        10 => handicap_indicator: YesNoCondition,
        11 => date_time_format: DateTimePeriodFormatQualifier,
        12 => death_date,
        13 => confidentiality_code,
        14 => city_name,
        15 => state_code,
        16 => country_code,
        17 => birth_sequence,
    }
}

typed_builder! {
    /// Builder for `REF`
    RefBuilder for REF {
        1 => qualifier: ReferenceIdentificationQualifier,
        2 => reference_id,
        3 => description,
    }
}

typed_builder! {
    /// Builder for `NM1`
    Nm1Builder for NM1 {
        1 => entity_id: EntityIdentifierCode,
        2 => entity_type: EntityTypeQualifier,
        3 => last_name,
        4 => first_name,
        5 => middle_name,
        6 => prefix,
        7 => suffix,
        8 => id_qualifier: IdentificationCodeQualifier,
        9 => id_code,
    }
}

typed_builder! {
    /// Builder for `N3`
    N3Builder for N3 {
        1 => address_line_1,
        2 => address_line_2,
    }
}

typed_builder! {
    /// Builder for `N4`
    N4Builder for N4 {
        1 => city,
        2 => state,
        3 => postal_code,
        4 => country_code,
        5 => location_qualifier,
        6 => location_id,
        7 => country_subdivision,
    }
}

typed_builder! {
    /// Builder for `DMG`
    DmgBuilder for DMG {
        1 => format: DateTimePeriodFormatQualifier,
        2 => birth_date,
        3 => gender: GenderCode,
        4 => marital_status: MaritalStatusCode,
        5 => race_ethnicity,
        6 => citizenship_status,
    }
}

typed_builder! {
    /// Builder for `HD`
    HdBuilder for HD {
        1 => maintenance_type: MaintenanceTypeCode,
        2 => maintenance_reason: MaintenanceReasonCode,
        3 => insurance_line: InsuranceLineCode,
        4 => plan_coverage_description,
        5 => coverage_level: CoverageLevelCode,
    }
}

impl InsBuilder {
    /// Mark the member as subscriber (`Y`) or dependent (`N`).
    pub fn subscriber(&mut self, is_subscriber: bool) -> crate::Result<&mut Self> {
        let indicator = if is_subscriber {
            YesNoCondition::Yes
        } else {
            YesNoCondition::No
        };
        self.subscriber_indicator(indicator)
    }

    pub fn deceased_member() -> crate::Result<Self> {
        Self::for_profile(&INS_DECEASED_MEMBER, None)
    }

    /// Record the date of death, formatted `CCYYMMDD`.
    pub fn died(&mut self, date: chrono::NaiveDate) -> crate::Result<&mut Self> {
        self.date_time_format(DateTimePeriodFormatQualifier::Date)?;
        self.death_date(date.format("%Y%m%d").to_string())
    }
}

impl RefBuilder {
    pub fn member_identification_number() -> crate::Result<Self> {
        Self::for_profile(&REF_MEMBER_IDENTIFICATION_NUMBER, None)
    }

    pub fn member_group_policy_number() -> crate::Result<Self> {
        Self::for_profile(&REF_MEMBER_GROUP_POLICY_NUMBER, None)
    }

    pub fn master_policy_number() -> crate::Result<Self> {
        Self::for_profile(&REF_MASTER_POLICY_NUMBER, None)
    }

    pub fn member_supplemental_identifier() -> crate::Result<Self> {
        Self::for_profile(&REF_MEMBER_SUPPLEMENTAL_IDENTIFIER, None)
    }
}

impl Nm1Builder {
    pub fn member_name() -> crate::Result<Self> {
        Self::for_profile(&NM1_MEMBER_NAME, None)
    }

    pub fn responsible_person() -> crate::Result<Self> {
        Self::for_profile(&NM1_RESPONSIBLE_PERSON, None)
    }
}

impl N3Builder {
    pub fn member_residence_street_address() -> crate::Result<Self> {
        Self::for_profile(&N3_MEMBER_RESIDENCE_STREET_ADDRESS, None)
    }
}

impl N4Builder {
    pub fn member_residence_city() -> crate::Result<Self> {
        Self::for_profile(&N4_MEMBER_RESIDENCE_CITY, None)
    }
}

impl DmgBuilder {
    pub fn member_demographics() -> crate::Result<Self> {
        Self::for_profile(&DMG_MEMBER_DEMOGRAPHICS, None)
    }

    /// Set the birth date, formatted `CCYYMMDD`.
    pub fn birth(&mut self, date: chrono::NaiveDate) -> crate::Result<&mut Self> {
        self.format(DateTimePeriodFormatQualifier::Date)?;
        self.birth_date(date.format("%Y%m%d").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use chrono::NaiveDate;

    #[test]
    fn test_ins_subscriber_addition() {
        let mut ins = InsBuilder::new();
        ins.subscriber(true)
            .unwrap()
            .relationship_code("self")
            .unwrap()
            .maintenance_type(MaintenanceTypeCode::Addition)
            .unwrap()
            .maintenance_reason("28")
            .unwrap()
            .benefit_status("active")
            .unwrap()
            .employment_status("FT")
            .unwrap();
        let segment = ins.build().unwrap();
        assert_eq!(segment.to_string(), "INS*Y*18*021*28*A***FT~");
    }

    #[test]
    fn test_ins_required_codes() {
        let mut ins = InsBuilder::new();
        ins.subscriber(false).unwrap().relationship_code("19").unwrap();
        let err = ins.build().unwrap_err();
        assert_eq!(err.to_string(), "INS03 (Maintenance Type Code) is required");
    }

    #[test]
    fn test_ins_unknown_code_names_element() {
        let mut ins = InsBuilder::new();
        let err = ins.relationship_code("cousin").unwrap_err();
        assert!(matches!(err, Error::InvalidCode { ref reference, .. } if reference == "INS02"));
        assert!(err.to_string().contains("'cousin'"));
    }

    #[test]
    fn test_ins_death_date_format_alone_is_valid() {
        let mut ins = InsBuilder::new();
        ins.subscriber(true)
            .unwrap()
            .relationship_code("18")
            .unwrap()
            .maintenance_type("024")
            .unwrap()
            .benefit_status("A")
            .unwrap()
            .date_time_format("D8")
            .unwrap();
        assert_eq!(ins.build().unwrap().to_string(), "INS*Y*18*024**A******D8~");
    }

    #[test]
    fn test_deceased_member_requires_death_date() {
        let mut ins = InsBuilder::deceased_member().unwrap();
        ins.subscriber(true)
            .unwrap()
            .relationship_code("18")
            .unwrap()
            .maintenance_type("024")
            .unwrap()
            .benefit_status("A")
            .unwrap();
        assert!(matches!(ins.clone().build(), Err(Error::CrossField { segment: "INS", .. })));

        ins.died(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()).unwrap();
        assert_eq!(
            ins.build().unwrap().to_string(),
            "INS*Y*18*024**A******D8*20240301~"
        );
    }

    #[test]
    fn test_ref_profiles() {
        let mut member_id = RefBuilder::member_identification_number().unwrap();
        member_id.reference_id("123456789").unwrap();
        assert_eq!(member_id.build().unwrap().to_string(), "REF*0F*123456789~");

        let mut group = RefBuilder::member_group_policy_number().unwrap();
        group.reference_id("GRP01").unwrap();
        assert_eq!(group.build().unwrap().to_string(), "REF*1L*GRP01~");

        let err = RefBuilder::master_policy_number().unwrap().build().unwrap_err();
        assert_eq!(err.to_string(), "REF02 (Reference Identification) is required");

        let mut other = RefBuilder::member_supplemental_identifier().unwrap();
        other.reference_id("X1").unwrap();
        assert_eq!(other.build().unwrap_err().reference(), Some("REF01"));
    }

    #[test]
    fn test_ref_without_profile_is_unchecked() {
        assert!(RefBuilder::new().build().is_ok());
    }

    #[test]
    fn test_nm1_member_name() {
        let mut nm1 = Nm1Builder::member_name().unwrap();
        nm1.last_name("DOE")
            .unwrap()
            .first_name("JANE")
            .unwrap()
            .id_qualifier("ssn")
            .unwrap()
            .id_code("123456789")
            .unwrap();
        assert_eq!(
            nm1.build().unwrap().to_string(),
            "NM1*IL*1*DOE*JANE****34*123456789~"
        );

        let err = Nm1Builder::member_name().unwrap().build().unwrap_err();
        assert_eq!(err.reference(), Some("NM103"));

        let mut nm1 = Nm1Builder::responsible_person().unwrap();
        nm1.last_name("DOE").unwrap();
        assert_eq!(nm1.build().unwrap().to_string(), "NM1*QD*1*DOE~");
    }

    #[test]
    fn test_address_profiles() {
        let err = N3Builder::member_residence_street_address()
            .unwrap()
            .build()
            .unwrap_err();
        assert_eq!(err.reference(), Some("N301"));

        let mut n4 = N4Builder::member_residence_city().unwrap();
        n4.city("LANSING").unwrap().state("MI").unwrap().postal_code("48933").unwrap();
        assert_eq!(n4.build().unwrap().to_string(), "N4*LANSING*MI*48933~");
        assert!(N4Builder::new().build().is_ok());
    }

    #[test]
    fn test_dmg_demographics() {
        let mut dmg = DmgBuilder::member_demographics().unwrap();
        dmg.birth(NaiveDate::from_ymd_opt(1980, 2, 29).unwrap())
            .unwrap()
            .gender("female")
            .unwrap()
            .marital_status(MaritalStatusCode::Married)
            .unwrap();
        assert_eq!(dmg.build().unwrap().to_string(), "DMG*D8*19800229*F*M~");

        let mut dmg = DmgBuilder::member_demographics().unwrap();
        dmg.birth_date("19800229").unwrap();
        assert_eq!(dmg.build().unwrap_err().reference(), Some("DMG03"));
    }

    #[test]
    fn test_hd_coverage() {
        let mut hd = HdBuilder::new();
        hd.maintenance_type("021")
            .unwrap()
            .insurance_line("dental")
            .unwrap()
            .coverage_level("ee+spouse")
            .unwrap();
        assert_eq!(hd.build().unwrap().to_string(), "HD*021**DEN**ESP~");

        let mut hd = HdBuilder::new();
        hd.maintenance_type("021").unwrap();
        assert_eq!(hd.build().unwrap_err().reference(), Some("HD03"));
    }
}
