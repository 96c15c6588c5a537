//! Member level codes: INS, REF, NM1, DMG and HD

crate::code_enum! {
    /// NM102
    pub enum EntityTypeQualifier: "Entity Type Qualifier" {
        Person = "1", "Person",
        NonPersonEntity = "2", "Non-Person Entity",
    }
    synonyms {
        "individual" => Person,
        "organization" => NonPersonEntity,
        "company" => NonPersonEntity,
    }
}

crate::code_enum! {
    /// INS01, INS10 and other Y/N elements
    pub enum YesNoCondition: "Yes/No Condition or Response Code" {
        No = "N", "No",
        Yes = "Y", "Yes",
    }
    synonyms {
        "true" => Yes,
        "false" => No,
        "subscriber" => Yes,
        "dependent" => No,
    }
}

crate::code_enum! {
    /// INS02
    pub enum IndividualRelationshipCode: "Individual Relationship Code" {
        Spouse = "01", "Spouse",
        FatherOrMother = "03", "Father or Mother",
        Grandfather = "04", "Grandfather or Grandmother",
        Grandson = "05", "Grandson or Granddaughter",
        NephewOrNiece = "07", "Nephew or Niece",
        FosterChild = "10", "Foster Child",
        Ward = "15", "Ward",
        StepsonOrStepdaughter = "17", "Stepson or Stepdaughter",
        SelfRelationship = "18", "Self",
        Child = "19", "Child",
        Employee = "20", "Employee",
        Unknown = "21", "Unknown",
        HandicappedDependent = "22", "Handicapped Dependent",
        SponsoredDependent = "23", "Sponsored Dependent",
        DependentOfMinorDependent = "24", "Dependent of a Minor Dependent",
        ExSpouse = "25", "Ex-spouse",
        Guardian = "26", "Guardian",
        CourtAppointedGuardian = "31", "Court Appointed Guardian",
        CollateralDependent = "38", "Collateral Dependent",
        LifePartner = "53", "Life Partner",
        AnnuitantOrPayee = "60", "Annuitant",
        TrusteeOrBeneficiary = "D2", "Trustee",
        OtherRelationship = "G8", "Other Relationship",
        OtherRelative = "G9", "Other Relative",
    }
    synonyms {
        "subscriber" => SelfRelationship,
        "employee self" => SelfRelationship,
        "husband" => Spouse,
        "wife" => Spouse,
        "son" => Child,
        "daughter" => Child,
        "domestic partner" => LifePartner,
        "stepchild" => StepsonOrStepdaughter,
    }
}

crate::code_enum! {
    /// INS03, HD01
    pub enum MaintenanceTypeCode: "Maintenance Type Code" {
        Change = "001", "Change",
        Addition = "021", "Addition",
        CancellationOrTermination = "024", "Cancellation or Termination",
        Reinstatement = "025", "Reinstatement",
        AuditOrCompare = "030", "Audit or Compare",
    }
    synonyms {
        "add" => Addition,
        "new enrollment" => Addition,
        "terminate" => CancellationOrTermination,
        "termination" => CancellationOrTermination,
        "cancel" => CancellationOrTermination,
        "audit" => AuditOrCompare,
        "update" => Change,
    }
}

crate::code_enum! {
    /// INS04
    pub enum MaintenanceReasonCode: "Maintenance Reason Code" {
        Divorce = "01", "Divorce",
        Birth = "02", "Birth",
        Death = "03", "Death",
        Retirement = "04", "Retirement",
        Adoption = "05", "Adoption",
        Strike = "06", "Strike",
        TerminationOfBenefits = "07", "Termination of Benefits",
        TerminationOfEmployment = "08", "Termination of Employment",
        ConsolidatedOmnibusBudgetReconciliationAct = "09", "Consolidation Omnibus Budget Reconciliation Act (COBRA)",
        CobraPremiumPaid = "10", "Consolidation Omnibus Budget Reconciliation Act (COBRA) Premium Paid",
        Surviving = "11", "Surviving Spouse",
        VoluntaryWithdrawal = "14", "Voluntary Withdrawal",
        PrimaryCareProviderChange = "15", "Primary Care Provider (PCP) Change",
        Quit = "16", "Quit",
        Fired = "17", "Fired",
        Suspended = "18", "Suspended",
        Active = "20", "Active",
        Disability = "21", "Disability",
        PlanChange = "22", "Plan Change",
        ChangeInIdentifyingDataElements = "25", "Change in Identifying Data Elements",
        DeclinedCoverage = "26", "Declined Coverage",
        PreEnrollment = "27", "Pre-Enrollment",
        InitialEnrollment = "28", "Initial Enrollment",
        BenefitSelection = "29", "Benefit Selection",
        LegalSeparation = "31", "Legal Separation",
        Marriage = "32", "Marriage",
        PersonnelDataChange = "33", "Personnel Data",
        Leave = "37", "Leave of Absence with Benefits",
        LeaveWithoutBenefits = "38", "Leave of Absence without Benefits",
        LayOff = "39", "Lay Off with Benefits",
        LayOffWithoutBenefits = "40", "Lay Off without Benefits",
        ReEnrollment = "41", "Re-enrollment",
        ChangeOfLocation = "43", "Change of Location",
        NonPayment = "59", "Non Payment",
        NoReasonGiven = "AI", "No Reason Given",
        MemberBenefitSelection = "EC", "Member Benefit Selection",
        NotificationOnly = "XN", "Notification Only",
        Transfer = "XT", "Transfer",
    }
    synonyms {
        "new hire" => InitialEnrollment,
        "open enrollment" => BenefitSelection,
        "demographic change" => ChangeInIdentifyingDataElements,
    }
}

crate::code_enum! {
    /// INS05
    pub enum BenefitStatusCode: "Benefit Status Code" {
        Active = "A", "Active",
        ConsolidatedOmnibusBudgetReconciliationAct = "C", "Consolidated Omnibus Budget Reconciliation Act (COBRA)",
        SurvivingInsured = "S", "Surviving Insured",
        TaxEquityAndFiscalResponsibilityAct = "T", "Tax Equity and Fiscal Responsibility Act (TEFRA)",
    }
    synonyms {
        "cobra" => ConsolidatedOmnibusBudgetReconciliationAct,
        "tefra" => TaxEquityAndFiscalResponsibilityAct,
        "survivor" => SurvivingInsured,
    }
}

crate::code_enum! {
    /// INS08
    pub enum EmploymentStatusCode: "Employment Status Code" {
        Active = "AC", "Active",
        ActiveMilitaryOverseas = "AO", "Active Military - Overseas",
        ActiveMilitaryUsa = "AU", "Active Military - USA",
        FullTime = "FT", "Full-time",
        LeaveOfAbsence = "L1", "Leave of Absence",
        PartTime = "PT", "Part-time",
        Retired = "RT", "Retired",
        Terminated = "TE", "Terminated",
    }
    synonyms {
        "fulltime" => FullTime,
        "parttime" => PartTime,
        "loa" => LeaveOfAbsence,
    }
}

crate::code_enum! {
    /// INS09
    pub enum StudentStatusCode: "Student Status Code" {
        FullTime = "F", "Full-time",
        NotAStudent = "N", "Not a Student",
        PartTime = "P", "Part-time",
    }
    synonyms {
        "full time student" => FullTime,
        "part time student" => PartTime,
        "none" => NotAStudent,
    }
}

crate::code_enum! {
    /// REF01
    pub enum ReferenceIdentificationQualifier: "Reference Identification Qualifier" {
        SubscriberNumber = "0F", "Subscriber Number",
        GroupOrPolicyNumber = "1L", "Group or Policy Number",
        ClientReportingCategory = "17", "Client Reporting Category",
        ClientNumber = "23", "Client Number",
        MasterPolicyNumber = "38", "Master Policy Number",
        CaseNumber = "3H", "Case Number",
        CrossReferenceNumber = "6O", "Cross Reference Number",
        PersonalIdentificationNumber = "ABB", "Personal Identification Number",
        DepartmentAgencyNumber = "DX", "Department/Agency Number",
        HealthInsuranceClaimNumber = "F6", "Health Insurance Claim (HIC) Number",
        PriorIdentifierNumber = "Q4", "Prior Identifier Number",
        MutuallyDefined = "ZZ", "Mutually Defined",
    }
    synonyms {
        "member id" => SubscriberNumber,
        "member identification number" => SubscriberNumber,
        "group number" => GroupOrPolicyNumber,
        "policy number" => GroupOrPolicyNumber,
        "hicn" => HealthInsuranceClaimNumber,
        "medicare number" => HealthInsuranceClaimNumber,
    }
}

crate::code_enum! {
    /// DMG03
    pub enum GenderCode: "Gender Code" {
        Female = "F", "Female",
        Male = "M", "Male",
        Unknown = "U", "Unknown",
    }
    synonyms {
        "woman" => Female,
        "man" => Male,
        "not specified" => Unknown,
    }
}

crate::code_enum! {
    /// DMG04
    pub enum MaritalStatusCode: "Marital Status Code" {
        RegisteredDomesticPartner = "B", "Registered Domestic Partner",
        Divorced = "D", "Divorced",
        Single = "I", "Single",
        Married = "M", "Married",
        Unreported = "R", "Unreported",
        Separated = "S", "Separated",
        Unmarried = "U", "Unmarried (Single or Divorced or Widowed)",
        Widowed = "W", "Widowed",
        LegallySeparated = "X", "Legally Separated",
    }
    synonyms {
        "domestic partner" => RegisteredDomesticPartner,
    }
}

crate::code_enum! {
    /// HD03
    pub enum InsuranceLineCode: "Insurance Line Code" {
        PreventativeCare = "AG", "Preventative Care/Wellness",
        TwentyFourHourCare = "AH", "24 Hour Care",
        MedicareRisk = "AJ", "Medicare Risk",
        MentalHealth = "AK", "Mental Health",
        DentalCapitation = "DCP", "Dental Capitation",
        Dental = "DEN", "Dental",
        ExclusiveProviderOrganization = "EPO", "Exclusive Provider Organization",
        Facility = "FAC", "Facility",
        Hearing = "HE", "Hearing",
        Health = "HLT", "Health",
        HealthMaintenanceOrganization = "HMO", "Health Maintenance Organization",
        LongTermCare = "LTC", "Long-Term Care",
        LongTermDisability = "LTD", "Long-Term Disability",
        MajorMedical = "MM", "Major Medical",
        MailOrderDrug = "MOD", "Mail Order Drug",
        PrescriptionDrug = "PDG", "Prescription Drug",
        PointOfService = "POS", "Point of Service",
        PreferredProviderOrganization = "PPO", "Preferred Provider Organization",
        Practitioners = "PRA", "Practitioners",
        ShortTermDisability = "STD", "Short-Term Disability",
        UtilizationReview = "UR", "Utilization Review",
        Vision = "VIS", "Vision",
    }
    synonyms {
        "medical" => Health,
        "rx" => PrescriptionDrug,
        "pharmacy" => PrescriptionDrug,
        "eye" => Vision,
    }
}

crate::code_enum! {
    /// HD05
    pub enum CoverageLevelCode: "Coverage Level Code" {
        ChildrenOnly = "CHD", "Children Only",
        DependentsOnly = "DEP", "Dependents Only",
        EmployeeAndOneDependent = "E1D", "Employee and One Dependent",
        EmployeeAndTwoDependents = "E2D", "Employee and Two Dependents",
        EmployeeAndThreeDependents = "E3D", "Employee and Three Dependents",
        EmployeeAndOneOrMoreDependents = "E5D", "Employee and One or More Dependents",
        EmployeeAndTwoOrMoreDependents = "E6D", "Employee and Two or More Dependents",
        EmployeeAndThreeOrMoreDependents = "E7D", "Employee and Three or More Dependents",
        EmployeeAndFourOrMoreDependents = "E8D", "Employee and Four or More Dependents",
        EmployeeAndFiveOrMoreDependents = "E9D", "Employee and Five or More Dependents",
        EmployeeAndChildren = "ECH", "Employee and Children",
        EmployeeOnly = "EMP", "Employee Only",
        EmployeeAndSpouse = "ESP", "Employee and Spouse",
        Family = "FAM", "Family",
        Individual = "IND", "Individual",
        SpouseAndChildren = "SPC", "Spouse and Children",
        SpouseOnly = "SPO", "Spouse Only",
        TwoParty = "TWO", "Two Party",
    }
    synonyms {
        "single" => EmployeeOnly,
        "ee" => EmployeeOnly,
        "ee+spouse" => EmployeeAndSpouse,
        "ee+children" => EmployeeAndChildren,
    }
}
