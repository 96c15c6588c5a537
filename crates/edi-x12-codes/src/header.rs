//! Transaction header codes: BGN, DTP, N1 and shared identification qualifiers

crate::code_enum! {
    /// BGN01
    pub enum TransactionSetPurposeCode: "Transaction Set Purpose Code" {
        Original = "00", "Original",
        ReSubmission = "15", "Re-Submission",
        InformationCopy = "22", "Information Copy",
    }
    synonyms {
        "new" => Original,
        "resend" => ReSubmission,
        "resubmit" => ReSubmission,
        "copy" => InformationCopy,
    }
}

crate::code_enum! {
    /// BGN05
    pub enum TimeCode: "Time Code" {
        AlaskaDaylightTime = "AD", "Alaska Daylight Time",
        AlaskaStandardTime = "AS", "Alaska Standard Time",
        AlaskaTime = "AT", "Alaska Time",
        CentralDaylightTime = "CD", "Central Daylight Time",
        CentralStandardTime = "CS", "Central Standard Time",
        CentralTime = "CT", "Central Time",
        EasternDaylightTime = "ED", "Eastern Daylight Time",
        EasternStandardTime = "ES", "Eastern Standard Time",
        EasternTime = "ET", "Eastern Time",
        GreenwichMeanTime = "GM", "Greenwich Mean Time",
        HawaiiAleutianDaylightTime = "HD", "Hawaii-Aleutian Daylight Time",
        HawaiiAleutianStandardTime = "HS", "Hawaii-Aleutian Standard Time",
        HawaiiAleutianTime = "HT", "Hawaii-Aleutian Time",
        LocalTime = "LT", "Local Time",
        MountainDaylightTime = "MD", "Mountain Daylight Time",
        MountainStandardTime = "MS", "Mountain Standard Time",
        MountainTime = "MT", "Mountain Time",
        PacificDaylightTime = "PD", "Pacific Daylight Time",
        PacificStandardTime = "PS", "Pacific Standard Time",
        PacificTime = "PT", "Pacific Time",
        CoordinatedUniversalTime = "UT", "Universal Time Coordinate",
    }
    synonyms {
        "utc" => CoordinatedUniversalTime,
        "gmt" => GreenwichMeanTime,
        "eastern" => EasternTime,
        "central" => CentralTime,
        "mountain" => MountainTime,
        "pacific" => PacificTime,
    }
}

crate::code_enum! {
    /// BGN08
    pub enum ActionCode: "Action Code" {
        Change = "2", "Change (Update)",
        Verify = "4", "Verify",
        Replace = "RX", "Replace",
    }
    synonyms {
        "update" => Change,
        "audit" => Verify,
        "full file" => Replace,
    }
}

crate::code_enum! {
    /// DTP01
    pub enum DateTimeQualifier: "Date/Time Qualifier" {
        Effective = "007", "Effective",
        Received = "050", "Received",
        Hire = "336", "Employment Begin",
        RetirementDate = "286", "Retirement",
        EnrollmentSignatureDate = "300", "Enrollment Signature Date",
        MaintenanceEffective = "303", "Maintenance Effective",
        EmploymentEnd = "337", "Employment End",
        MedicareBegin = "338", "Medicare Begin",
        MedicareEnd = "339", "Medicare End",
        CobraBegin = "340", "Consolidated Omnibus Budget Reconciliation Act (COBRA) Begin",
        CobraEnd = "341", "Consolidated Omnibus Budget Reconciliation Act (COBRA) End",
        PremiumPaidToDateEnd = "343", "Premium Paid to Date End",
        BenefitBegin = "348", "Benefit Begin",
        BenefitEnd = "349", "Benefit End",
        EducationBegin = "350", "Education Begin",
        EducationEnd = "351", "Education End",
        EligibilityBegin = "356", "Eligibility Begin",
        EligibilityEnd = "357", "Eligibility End",
        Enrollment = "382", "Enrollment",
        AdjustedHire = "383", "Adjusted Hire",
        ReportStart = "090", "Report Start",
        ReportEnd = "091", "Report End",
        Death = "435", "Date of Death",
    }
    synonyms {
        "coverage start" => BenefitBegin,
        "coverage begin" => BenefitBegin,
        "coverage end" => BenefitEnd,
        "termination" => BenefitEnd,
        "hire date" => Hire,
    }
}

crate::code_enum! {
    /// DTP02, DMG01, INS11
    pub enum DateTimePeriodFormatQualifier: "Date Time Period Format Qualifier" {
        Date = "D8", "Date Expressed in Format CCYYMMDD",
        DateRange = "RD8", "Range of Dates Expressed in Format CCYYMMDD-CCYYMMDD",
        DateTime = "DT", "Date and Time Expressed in Format CCYYMMDDHHMM",
    }
    synonyms {
        "ccyymmdd" => Date,
        "yyyymmdd" => Date,
        "range" => DateRange,
    }
}

crate::code_enum! {
    /// N101, NM101
    pub enum EntityIdentifierCode: "Entity Identifier Code" {
        CorrectedInsured = "74", "Corrected Insured",
        PriorIncorrectInsured = "70", "Prior Incorrect Insured",
        PostalMailingAddress = "31", "Postal Mailing Address",
        Employer = "36", "Employer",
        Broker = "BO", "Broker or Sales Office",
        PersonLegallyResponsibleForChild = "E1", "Person or Other Entity Legally Responsible for a Child",
        Executor = "EI", "Executor of Estate",
        Guardian = "GD", "Guardian",
        InsuredOrSubscriber = "IL", "Insured or Subscriber",
        Insurer = "IN", "Insurer",
        PowerOfAttorney = "J6", "Power of Attorney",
        LegalRepresentative = "LR", "Legal Representative",
        EducationalInstitution = "M8", "Educational Institution",
        PlanSponsor = "P5", "Plan Sponsor",
        ResponsibleParty = "QD", "Responsible Party",
        CustodialParent = "S3", "Custodial Parent",
        ThirdPartyAdministrator = "TV", "Third Party Administrator (TPA)",
    }
    synonyms {
        "sponsor" => PlanSponsor,
        "carrier" => Insurer,
        "payer" => Insurer,
        "tpa" => ThirdPartyAdministrator,
        "subscriber" => InsuredOrSubscriber,
        "member" => InsuredOrSubscriber,
        "mailing address" => PostalMailingAddress,
    }
}

crate::code_enum! {
    /// N103, NM108
    pub enum IdentificationCodeQualifier: "Identification Code Qualifier" {
        DunsNumber = "1", "D-U-N-S Number, Dun & Bradstreet",
        DunsPlusFourNumber = "9", "D-U-N-S+4, D-U-N-S Number with Four Character Suffix",
        EmployerIdentificationNumber = "24", "Employer's Identification Number",
        SocialSecurityNumber = "34", "Social Security Number",
        CodeAssignedByTheOrganization = "94", "Code assigned by the organization that is the ultimate destination of the transaction set",
        FederalTaxpayerIdentificationNumber = "FI", "Federal Taxpayer's Identification Number",
        CentersForMedicareAndMedicaidServicesPlanId = "XV", "Centers for Medicare and Medicaid Services PlanID",
        MutuallyDefined = "ZZ", "Mutually Defined",
    }
    synonyms {
        "ssn" => SocialSecurityNumber,
        "ein" => EmployerIdentificationNumber,
        "fein" => FederalTaxpayerIdentificationNumber,
        "tin" => FederalTaxpayerIdentificationNumber,
        "tax id" => FederalTaxpayerIdentificationNumber,
        "duns" => DunsNumber,
        "plan id" => CentersForMedicareAndMedicaidServicesPlanId,
        "member id" => MutuallyDefined,
    }
}
