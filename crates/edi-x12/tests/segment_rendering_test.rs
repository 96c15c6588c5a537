//! Integration tests for building and rendering individual 834 segments

use anyhow::Result;
use chrono::NaiveDate;
use edi_x12::segments::{
    BgnBuilder, DmgBuilder, DtpBuilder, HdBuilder, InsBuilder, IsaBuilder, N1Builder, N3Builder,
    N4Builder, Nm1Builder, RefBuilder,
};
use edi_x12::{
    Context, Delimiters, ElementSeparator, Error, LineTerminator, RenderError, SegmentBuilder,
    SegmentTerminator, X12Serializer, render, render_segment, spec,
};
use edi_x12_codes::{InterchangeUsageIndicator, TransactionSetPurposeCode};
use pretty_assertions::assert_eq;

fn context() -> Context {
    let at = NaiveDate::from_ymd_opt(2023, 8, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    let mut context = Context::at(at);
    context
        .set_sender_id("FASTCHKN")
        .set_receiver_id("MICHGVEDI");
    context
}

#[test]
fn isa_renders_exact_wire_line() -> Result<()> {
    let mut isa = IsaBuilder::new();
    isa.sender_id("FASTCHKN")?
        .receiver_id("MICHGVEDI")?
        .date("230801")?
        .time("1200")?
        .control_number("000000001")?
        .component_separator(":")?;
    let segment = isa.build()?;

    assert_eq!(
        render_segment(&segment, Some(&Context::default()))?,
        "ISA*00*          *00*          *ZZ*FASTCHKN       *ZZ*MICHGVEDI      *230801*1200*^*00501*000000001*0*P*:~\n"
    );
    Ok(())
}

#[test]
fn isa_from_context_matches_manual_build() -> Result<()> {
    let context = context();
    let from_context = IsaBuilder::with_context(&context).build()?;

    let mut manual = IsaBuilder::new();
    manual
        .sender_id("FASTCHKN")?
        .receiver_id("MICHGVEDI")?
        .date("230801")?
        .time("1200")?
        .control_number("000000001")?
        .component_separator(":")?;

    assert_eq!(from_context, manual.build()?);
    Ok(())
}

#[test]
fn fixed_width_truncates_long_sender() -> Result<()> {
    let mut isa = IsaBuilder::with_context(&context());
    isa.sender_id("A SENDER NAME THAT IS FAR TOO LONG")?;
    assert_eq!(isa.get(6), Some("A SENDER NAME T"));
    Ok(())
}

#[test]
fn trailing_nulls_are_dropped_and_inner_nulls_kept() {
    let line = render(
        "ID",
        &[Some("a"), None, Some("c"), None, None],
        &Delimiters::default(),
    );
    assert_eq!(line, "ID*a**c~\n");
}

#[test]
fn all_null_elements_render_identifier_only() {
    assert_eq!(render("ID", &[None, None], &Delimiters::default()), "ID~\n");
}

#[test]
fn missing_reference_names_bgn02() -> Result<()> {
    let mut bgn = BgnBuilder::with_context(&context());
    bgn.purpose_code(TransactionSetPurposeCode::Original)?;
    let err = bgn.build().unwrap_err();

    assert!(err.is_validation());
    assert_eq!(err.reference(), Some("BGN02"));
    assert_eq!(err.to_string(), "BGN02 (Reference Identification) is required");
    Ok(())
}

#[test]
fn n1_without_name_or_qualifier_is_cross_field_error() -> Result<()> {
    let mut n1 = N1Builder::new();
    n1.entity_id("P5")?;
    let err = n1.build().unwrap_err();

    assert!(matches!(err, Error::CrossField { segment: "N1", .. }));
    Ok(())
}

#[test]
fn n1_with_qualifier_only_builds_on_base_segment() -> Result<()> {
    let mut n1 = N1Builder::new();
    n1.entity_id("IN")?.id_qualifier("FI")?;
    assert_eq!(n1.build()?.to_string(), "N1*IN**FI~");

    let mut n1 = N1Builder::identified_party()?;
    n1.entity_id("IN")?.id_qualifier("FI")?;
    assert!(matches!(n1.build(), Err(Error::CrossField { segment: "N1", .. })));
    Ok(())
}

#[test]
fn lowercase_codes_fail_closed() {
    let mut dmg = DmgBuilder::new();
    assert!(matches!(dmg.gender("m"), Err(Error::InvalidCode { .. })));
    assert!(dmg.gender("M").is_ok());

    let mut isa = IsaBuilder::with_context(&context());
    assert!(isa.usage_indicator("p").is_err());
}

#[test]
fn delimiter_inside_value_is_not_rendered() -> Result<()> {
    let mut n1 = N1Builder::plan_sponsor()?;
    n1.name("ACME*CORP")?;
    let segment = n1.build()?;
    let err = render_segment(&segment, Some(&context())).unwrap_err();
    assert!(matches!(
        err,
        Error::Render(RenderError::ReservedCharacter { character: '*', .. })
    ));
    Ok(())
}

#[test]
fn usage_indicator_accepts_synonym() -> Result<()> {
    let mut isa = IsaBuilder::with_context(&context());
    isa.usage_indicator("sandbox")?;
    let segment = isa.build()?;
    assert_eq!(segment.value(15), Some("T"));

    let mut isa = IsaBuilder::with_context(&context());
    isa.usage_indicator(InterchangeUsageIndicator::Test)?;
    assert_eq!(isa.build()?.value(15), Some("T"));
    Ok(())
}

#[test]
fn unknown_code_is_rejected_at_set_time() {
    let mut ins = InsBuilder::new();
    let err = ins.relationship_code("second cousin").unwrap_err();
    assert!(matches!(err, Error::InvalidCode { .. }));
    assert_eq!(err.reference(), Some("INS02"));
}

#[test]
fn render_without_context_is_state_error() -> Result<()> {
    let mut n3 = N3Builder::new();
    n3.address_line_1("123 MAIN ST")?;
    let segment = n3.build()?;

    let err = segment.render().unwrap_err();
    assert!(matches!(err, Error::Render(RenderError::ContextMissing { .. })));
    assert!(!err.is_validation());
    Ok(())
}

#[test]
fn custom_delimiters_flow_through_context() -> Result<()> {
    let mut context = context();
    context.set_delimiters(Delimiters {
        element: ElementSeparator::Pipe,
        segment: SegmentTerminator::Tilde,
        line: LineTerminator::None,
        ..Delimiters::default()
    })?;

    let mut n4 = N4Builder::member_residence_city()?;
    n4.city("LANSING")?.state("MI")?.postal_code("48933")?;
    let segment = n4.build()?;

    assert_eq!(render_segment(&segment, Some(&context))?, "N4|LANSING|MI|48933~");
    Ok(())
}

#[test]
fn member_loop_serializes_in_order() -> Result<()> {
    let mut ins = InsBuilder::new();
    ins.subscriber(true)?
        .relationship_code("self")?
        .maintenance_type("add")?
        .benefit_status("active")?;

    let mut subscriber_id = RefBuilder::member_identification_number()?;
    subscriber_id.reference_id("123456789")?;

    let mut name = Nm1Builder::member_name()?;
    name.last_name("DOE")?.first_name("JANE")?;

    let mut dmg = DmgBuilder::member_demographics()?;
    dmg.birth(NaiveDate::from_ymd_opt(1980, 2, 29).unwrap())?
        .gender("F")?;

    let mut hd = HdBuilder::new();
    hd.maintenance_type("add")?
        .insurance_line("dental")?
        .coverage_level("ee+spouse")?;

    let mut begin = DtpBuilder::benefit_begin()?;
    begin.date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())?;

    let segments = vec![
        ins.build()?,
        subscriber_id.build()?,
        name.build()?,
        dmg.build()?,
        hd.build()?,
        begin.build()?,
    ];

    let output = X12Serializer::from_context(&context()).serialize(&segments)?;
    assert_eq!(
        output,
        "INS*Y*18*021**A~\n\
         REF*0F*123456789~\n\
         NM1*IL*1*DOE*JANE~\n\
         DMG*D8*19800229*F~\n\
         HD*021**DEN**ESP~\n\
         DTP*348*D8*20240101~\n"
    );
    Ok(())
}

#[test]
fn generic_builder_drives_any_segment_kind() -> Result<()> {
    let mut builder = SegmentBuilder::new(spec::find("ref")?);
    builder.set_field("qualifier", "group number")?;
    builder.set_field("REF02", "GRP-42")?;
    let segment = builder.build()?;
    assert_eq!(segment.to_string(), "REF*1L*GRP-42~");
    Ok(())
}

#[test]
fn profile_lookup_is_case_insensitive() -> Result<()> {
    let profile = spec::find_profile("N1", "Plan Sponsor")?;
    let mut builder = SegmentBuilder::for_profile(profile, None)?;
    builder.set_field("name", "ACME CORP")?;
    assert_eq!(builder.build()?.to_string(), "N1*P5*ACME CORP~");
    Ok(())
}
