//! Interchange (ISA), functional group (GS) and transaction set (ST) codes

crate::code_enum! {
    /// ISA01
    pub enum AuthorizationInformationQualifier: "Authorization Information Qualifier" {
        NoAuthorizationInformation = "00", "No Authorization Information Present",
        AdditionalDataIdentification = "03", "Additional Data Identification",
    }
    synonyms {
        "none" => NoAuthorizationInformation,
    }
}

crate::code_enum! {
    /// ISA03
    pub enum SecurityInformationQualifier: "Security Information Qualifier" {
        NoSecurityInformation = "00", "No Security Information Present",
        Password = "01", "Password",
    }
    synonyms {
        "none" => NoSecurityInformation,
    }
}

crate::code_enum! {
    /// ISA05 / ISA07
    pub enum InterchangeIdQualifier: "Interchange ID Qualifier" {
        Duns = "01", "Duns (Dun & Bradstreet)",
        DunsPlusSuffix = "14", "Duns Plus Suffix",
        HealthIndustryNumber = "20", "Health Industry Number (HIN)",
        CarrierIdentificationNumber = "27", "Carrier Identification Number as assigned by Health Care Financing Administration (HCFA)",
        FiscalIntermediaryIdentificationNumber = "28", "Fiscal Intermediary Identification Number as assigned by Health Care Financing Administration (HCFA)",
        MedicareProviderAndSupplierIdentificationNumber = "29", "Medicare Provider and Supplier Identification Number as assigned by Health Care Financing Administration (HCFA)",
        UsFederalTaxIdentificationNumber = "30", "U.S. Federal Tax Identification Number",
        NaicCompanyCode = "33", "National Association of Insurance Commissioners Company Code (NAIC)",
        MutuallyDefined = "ZZ", "Mutually Defined",
    }
    synonyms {
        "fein" => UsFederalTaxIdentificationNumber,
        "tax id" => UsFederalTaxIdentificationNumber,
        "naic" => NaicCompanyCode,
        "hin" => HealthIndustryNumber,
        "custom" => MutuallyDefined,
    }
}

crate::code_enum! {
    /// ISA14
    pub enum AcknowledgmentRequested: "Acknowledgment Requested" {
        NotRequested = "0", "No Interchange Acknowledgment Requested",
        Requested = "1", "Interchange Acknowledgment Requested (TA1)",
    }
    synonyms {
        "no" => NotRequested,
        "false" => NotRequested,
        "yes" => Requested,
        "true" => Requested,
        "ta1" => Requested,
    }
}

crate::code_enum! {
    /// ISA15
    pub enum InterchangeUsageIndicator: "Interchange Usage Indicator" {
        Information = "I", "Information",
        Production = "P", "Production Data",
        Test = "T", "Test Data",
    }
    synonyms {
        "prod" => Production,
        "live" => Production,
        "testing" => Test,
        "sandbox" => Test,
        "staging" => Test,
        "info" => Information,
    }
}

crate::code_enum! {
    /// GS01
    pub enum FunctionalIdentifierCode: "Functional Identifier Code" {
        BenefitEnrollmentAndMaintenance = "BE", "Benefit Enrollment and Maintenance (834)",
        FunctionalAcknowledgment = "FA", "Functional or Implementation Acknowledgment Transaction Sets",
    }
    synonyms {
        "834" => BenefitEnrollmentAndMaintenance,
        "enrollment" => BenefitEnrollmentAndMaintenance,
        "benefit enrollment" => BenefitEnrollmentAndMaintenance,
        "999" => FunctionalAcknowledgment,
    }
}

crate::code_enum! {
    /// GS07
    pub enum ResponsibleAgencyCode: "Responsible Agency Code" {
        TransportationDataCoordinatingCommittee = "T", "Transportation Data Coordinating Committee (TDCC)",
        AccreditedStandardsCommitteeX12 = "X", "Accredited Standards Committee X12",
    }
    synonyms {
        "x12" => AccreditedStandardsCommitteeX12,
        "asc x12" => AccreditedStandardsCommitteeX12,
        "tdcc" => TransportationDataCoordinatingCommittee,
    }
}

crate::code_enum! {
    /// ST01
    pub enum TransactionSetIdentifierCode: "Transaction Set Identifier Code" {
        BenefitEnrollmentAndMaintenance = "834", "Benefit Enrollment and Maintenance",
    }
    synonyms {
        "enrollment" => BenefitEnrollmentAndMaintenance,
    }
}
