//! Interchange, functional group and transaction set envelope segments

use crate::spec::{ContextValue, ElementSpec, Profile, Rule, SegmentSpec};
use edi_x12_codes::{
    AcknowledgmentRequested, AuthorizationInformationQualifier, FunctionalIdentifierCode,
    InterchangeIdQualifier, InterchangeUsageIndicator, ResponsibleAgencyCode,
    SecurityInformationQualifier, TransactionSetIdentifierCode,
};

/// Interchange control header
pub static ISA: SegmentSpec = SegmentSpec {
    id: "ISA",
    name: "Interchange Control Header",
    elements: &[
        ElementSpec::coded::<AuthorizationInformationQualifier>(
            1,
            "authorization_qualifier",
            "Authorization Information Qualifier",
        )
        .default_value("00"),
        ElementSpec::text(2, "authorization_information", "Authorization Information")
            .fixed_width(10)
            .default_value(""),
        ElementSpec::coded::<SecurityInformationQualifier>(
            3,
            "security_qualifier",
            "Security Information Qualifier",
        )
        .default_value("00"),
        ElementSpec::text(4, "security_information", "Security Information")
            .fixed_width(10)
            .default_value(""),
        ElementSpec::coded::<InterchangeIdQualifier>(5, "sender_qualifier", "Interchange ID Qualifier")
            .default_value("ZZ")
            .from_context(ContextValue::SenderQualifier),
        ElementSpec::text(6, "sender_id", "Interchange Sender ID")
            .required()
            .fixed_width(15)
            .from_context(ContextValue::SenderId),
        ElementSpec::coded::<InterchangeIdQualifier>(
            7,
            "receiver_qualifier",
            "Interchange ID Qualifier",
        )
        .default_value("ZZ")
        .from_context(ContextValue::ReceiverQualifier),
        ElementSpec::text(8, "receiver_id", "Interchange Receiver ID")
            .required()
            .fixed_width(15)
            .from_context(ContextValue::ReceiverId),
        ElementSpec::text(9, "date", "Interchange Date")
            .required()
            .from_context(ContextValue::InterchangeDate),
        ElementSpec::text(10, "time", "Interchange Time")
            .required()
            .from_context(ContextValue::InterchangeTime),
        ElementSpec::text(11, "repetition_separator", "Repetition Separator")
            .default_value("^")
            .from_context(ContextValue::RepetitionSeparator),
        ElementSpec::text(12, "version", "Interchange Control Version Number").default_value("00501"),
        ElementSpec::text(13, "control_number", "Interchange Control Number")
            .required()
            .from_context(ContextValue::InterchangeControlNumber),
        ElementSpec::coded::<AcknowledgmentRequested>(
            14,
            "acknowledgment_requested",
            "Acknowledgment Requested",
        )
        .default_value("0"),
        ElementSpec::coded::<InterchangeUsageIndicator>(
            15,
            "usage_indicator",
            "Interchange Usage Indicator",
        )
        .default_value("P")
        .from_context(ContextValue::UsageIndicator),
        ElementSpec::text(16, "component_separator", "Component Element Separator")
            .required()
            .exactly(1)
            .from_context(ContextValue::ComponentSeparator),
    ],
    rules: &[],
};

/// Functional group header
pub static GS: SegmentSpec = SegmentSpec {
    id: "GS",
    name: "Functional Group Header",
    elements: &[
        ElementSpec::coded::<FunctionalIdentifierCode>(1, "functional_id", "Functional Identifier Code")
            .required()
            .default_value("BE"),
        ElementSpec::text(2, "sender_code", "Application Sender's Code")
            .required()
            .from_context(ContextValue::SenderId),
        ElementSpec::text(3, "receiver_code", "Application Receiver's Code")
            .required()
            .from_context(ContextValue::ReceiverId),
        ElementSpec::text(4, "date", "Date")
            .required()
            .from_context(ContextValue::Date),
        ElementSpec::text(5, "time", "Time")
            .required()
            .from_context(ContextValue::Time),
        ElementSpec::text(6, "control_number", "Group Control Number")
            .required()
            .from_context(ContextValue::GroupControlNumber),
        ElementSpec::coded::<ResponsibleAgencyCode>(7, "agency", "Responsible Agency Code")
            .required()
            .default_value("X"),
        ElementSpec::text(8, "version", "Version / Release / Industry Identifier Code")
            .required()
            .default_value("005010X220A1")
            .from_context(ContextValue::ImplementationReference),
    ],
    rules: &[],
};

/// Transaction set header
pub static ST: SegmentSpec = SegmentSpec {
    id: "ST",
    name: "Transaction Set Header",
    elements: &[
        ElementSpec::coded::<TransactionSetIdentifierCode>(
            1,
            "transaction_set_id",
            "Transaction Set Identifier Code",
        )
        .required()
        .default_value("834"),
        ElementSpec::text(2, "control_number", "Transaction Set Control Number")
            .required()
            .min(4)
            .max(9)
            .from_context(ContextValue::TransactionSetControlNumber),
        ElementSpec::text(3, "implementation_reference", "Implementation Convention Reference")
            .default_value("005010X220A1")
            .from_context(ContextValue::ImplementationReference),
    ],
    rules: &[],
};

/// Transaction set trailer
pub static SE: SegmentSpec = SegmentSpec {
    id: "SE",
    name: "Transaction Set Trailer",
    elements: &[
        ElementSpec::text(1, "segment_count", "Number of Included Segments"),
        ElementSpec::text(2, "control_number", "Transaction Set Control Number")
            .from_context(ContextValue::TransactionSetControlNumber),
    ],
    rules: &[],
};

/// Functional group trailer
pub static GE: SegmentSpec = SegmentSpec {
    id: "GE",
    name: "Functional Group Trailer",
    elements: &[
        ElementSpec::text(1, "transaction_set_count", "Number of Transaction Sets Included"),
        ElementSpec::text(2, "control_number", "Group Control Number")
            .from_context(ContextValue::GroupControlNumber),
    ],
    rules: &[],
};

/// Interchange control trailer
pub static IEA: SegmentSpec = SegmentSpec {
    id: "IEA",
    name: "Interchange Control Trailer",
    elements: &[
        ElementSpec::text(1, "functional_group_count", "Number of Included Functional Groups"),
        ElementSpec::text(2, "control_number", "Interchange Control Number")
            .from_context(ContextValue::InterchangeControlNumber),
    ],
    rules: &[],
};

const BOTH_REQUIRED: &[Rule] = &[Rule::Required(1), Rule::Required(2)];

pub static SE_TRANSACTION_SET_TRAILER: Profile = Profile {
    name: "transaction_set_trailer",
    segment: &SE,
    presets: &[],
    rules: BOTH_REQUIRED,
};

pub static GE_FUNCTIONAL_GROUP_TRAILER: Profile = Profile {
    name: "functional_group_trailer",
    segment: &GE,
    presets: &[],
    rules: BOTH_REQUIRED,
};

pub static IEA_INTERCHANGE_TRAILER: Profile = Profile {
    name: "interchange_trailer",
    segment: &IEA,
    presets: &[],
    rules: BOTH_REQUIRED,
};

typed_builder! {
    /// Builder for `ISA`
    IsaBuilder for ISA {
        1 => authorization_qualifier: AuthorizationInformationQualifier,
        2 => authorization_information,
        3 => security_qualifier: SecurityInformationQualifier,
        4 => security_information,
        5 => sender_qualifier: InterchangeIdQualifier,
        6 => sender_id,
        7 => receiver_qualifier: InterchangeIdQualifier,
        8 => receiver_id,
        9 => date,
        10 => time,
        11 => repetition_separator,
        12 => version,
        13 => control_number,
        14 => acknowledgment_requested: AcknowledgmentRequested,
        15 => usage_indicator: InterchangeUsageIndicator,
        16 => component_separator,
    }
}

typed_builder! {
    /// Builder for `GS`
    GsBuilder for GS {
        1 => functional_id: FunctionalIdentifierCode,
        2 => sender_code,
        3 => receiver_code,
        4 => date,
        5 => time,
        6 => control_number,
        7 => agency: ResponsibleAgencyCode,
        8 => version,
    }
}

typed_builder! {
    /// Builder for `ST`
    StBuilder for ST {
        1 => transaction_set_id: TransactionSetIdentifierCode,
        2 => control_number,
        3 => implementation_reference,
    }
}

typed_builder! {
    /// Builder for `SE`
    SeBuilder for SE {
        1 => segment_count,
        2 => control_number,
    }
}

typed_builder! {
    /// Builder for `GE`
    GeBuilder for GE {
        1 => transaction_set_count,
        2 => control_number,
    }
}

typed_builder! {
    /// Builder for `IEA`
    IeaBuilder for IEA {
        1 => functional_group_count,
        2 => control_number,
    }
}

impl SeBuilder {
    /// `SE` requiring both the segment count and control number
    pub fn transaction_set_trailer(context: Option<&crate::Context>) -> crate::Result<Self> {
        Self::for_profile(&SE_TRANSACTION_SET_TRAILER, context)
    }
}

impl GeBuilder {
    /// `GE` requiring both the transaction set count and control number
    pub fn functional_group_trailer(context: Option<&crate::Context>) -> crate::Result<Self> {
        Self::for_profile(&GE_FUNCTIONAL_GROUP_TRAILER, context)
    }
}

impl IeaBuilder {
    /// `IEA` requiring both the group count and control number
    pub fn interchange_trailer(context: Option<&crate::Context>) -> crate::Result<Self> {
        Self::for_profile(&IEA_INTERCHANGE_TRAILER, context)
    }
}
