use super::Capability;
use crate::macros::spirv_enum;

spirv_enum! {
    /// The opcode of a SPIR-V instruction.
    ///
    /// The name of each member is the instruction's mnemonic without the `Op` prefix. Instructions
    /// that can only be used when a capability is declared list the capabilities of which at least
    /// one must be present.
    Op(u32) requires Capability;

    Nop = 0,
    Undef = 1,
    SourceContinued = 2,
    Source = 3,
    SourceExtension = 4,
    Name = 5,
    MemberName = 6,
    String = 7,
    Line = 8,
    Extension = 10,
    ExtInstImport = 11,
    ExtInst = 12,
    MemoryModel = 14,
    EntryPoint = 15,
    ExecutionMode = 16,
    Capability = 17,
    TypeVoid = 19,
    TypeBool = 20,
    TypeInt = 21,
    TypeFloat = 22,
    TypeVector = 23,
    TypeMatrix = 24
    RequiresOneOf([Matrix]),
    TypeImage = 25,
    TypeSampler = 26,
    TypeSampledImage = 27,
    TypeArray = 28,
    TypeRuntimeArray = 29
    RequiresOneOf([Shader]),
    TypeStruct = 30,
    TypeOpaque = 31
    RequiresOneOf([Kernel]),
    TypePointer = 32,
    TypeFunction = 33,
    TypeEvent = 34
    RequiresOneOf([Kernel]),
    TypeDeviceEvent = 35
    RequiresOneOf([DeviceEnqueue]),
    TypeReserveId = 36
    RequiresOneOf([Pipes]),
    TypeQueue = 37
    RequiresOneOf([DeviceEnqueue]),
    TypePipe = 38
    RequiresOneOf([Pipes]),
    TypeForwardPointer = 39
    RequiresOneOf([Addresses]),
    ConstantTrue = 41,
    ConstantFalse = 42,
    Constant = 43,
    ConstantComposite = 44,
    ConstantSampler = 45
    RequiresOneOf([LiteralSampler]),
    ConstantNull = 46,
    SpecConstantTrue = 48,
    SpecConstantFalse = 49,
    SpecConstant = 50,
    SpecConstantComposite = 51,
    SpecConstantOp = 52,
    Function = 54,
    FunctionParameter = 55,
    FunctionEnd = 56,
    FunctionCall = 57,
    Variable = 59,
    ImageTexelPointer = 60,
    Load = 61,
    Store = 62,
    CopyMemory = 63,
    CopyMemorySized = 64
    RequiresOneOf([Addresses]),
    AccessChain = 65,
    InBoundsAccessChain = 66,
    PtrAccessChain = 67
    RequiresOneOf([Addresses, VariablePointers, VariablePointersStorageBuffer]),
    ArrayLength = 68
    RequiresOneOf([Shader]),
    GenericPtrMemSemantics = 69
    RequiresOneOf([Kernel]),
    InBoundsPtrAccessChain = 70
    RequiresOneOf([Addresses]),
    Decorate = 71,
    MemberDecorate = 72,
    DecorationGroup = 73,
    GroupDecorate = 74,
    GroupMemberDecorate = 75,
    VectorExtractDynamic = 77,
    VectorInsertDynamic = 78,
    VectorShuffle = 79,
    CompositeConstruct = 80,
    CompositeExtract = 81,
    CompositeInsert = 82,
    CopyObject = 83,
    Transpose = 84
    RequiresOneOf([Matrix]),
    SampledImage = 86,
    ImageSampleImplicitLod = 87
    RequiresOneOf([Shader]),
    ImageSampleExplicitLod = 88,
    ImageSampleDrefImplicitLod = 89
    RequiresOneOf([Shader]),
    ImageSampleDrefExplicitLod = 90
    RequiresOneOf([Shader]),
    ImageSampleProjImplicitLod = 91
    RequiresOneOf([Shader]),
    ImageSampleProjExplicitLod = 92
    RequiresOneOf([Shader]),
    ImageSampleProjDrefImplicitLod = 93
    RequiresOneOf([Shader]),
    ImageSampleProjDrefExplicitLod = 94
    RequiresOneOf([Shader]),
    ImageFetch = 95,
    ImageGather = 96
    RequiresOneOf([Shader]),
    ImageDrefGather = 97
    RequiresOneOf([Shader]),
    ImageRead = 98,
    ImageWrite = 99,
    Image = 100,
    ImageQueryFormat = 101
    RequiresOneOf([Kernel]),
    ImageQueryOrder = 102
    RequiresOneOf([Kernel]),
    ImageQuerySizeLod = 103
    RequiresOneOf([Kernel, ImageQuery]),
    ImageQuerySize = 104
    RequiresOneOf([Kernel, ImageQuery]),
    ImageQueryLod = 105
    RequiresOneOf([ImageQuery]),
    ImageQueryLevels = 106
    RequiresOneOf([Kernel, ImageQuery]),
    ImageQuerySamples = 107
    RequiresOneOf([Kernel, ImageQuery]),
    ConvertFToU = 109,
    ConvertFToS = 110,
    ConvertSToF = 111,
    ConvertUToF = 112,
    UConvert = 113,
    SConvert = 114,
    FConvert = 115,
    QuantizeToF16 = 116
    RequiresOneOf([Shader]),
    ConvertPtrToU = 117
    RequiresOneOf([Addresses]),
    SatConvertSToU = 118
    RequiresOneOf([Kernel]),
    SatConvertUToS = 119
    RequiresOneOf([Kernel]),
    ConvertUToPtr = 120
    RequiresOneOf([Addresses]),
    PtrCastToGeneric = 121
    RequiresOneOf([Kernel]),
    GenericCastToPtr = 122
    RequiresOneOf([Kernel]),
    GenericCastToPtrExplicit = 123
    RequiresOneOf([Kernel]),
    Bitcast = 124,
    SNegate = 126,
    FNegate = 127,
    IAdd = 128,
    FAdd = 129,
    ISub = 130,
    FSub = 131,
    IMul = 132,
    FMul = 133,
    UDiv = 134,
    SDiv = 135,
    FDiv = 136,
    UMod = 137,
    SRem = 138,
    SMod = 139,
    FRem = 140,
    FMod = 141,
    VectorTimesScalar = 142,
    MatrixTimesScalar = 143
    RequiresOneOf([Matrix]),
    VectorTimesMatrix = 144
    RequiresOneOf([Matrix]),
    MatrixTimesVector = 145
    RequiresOneOf([Matrix]),
    MatrixTimesMatrix = 146
    RequiresOneOf([Matrix]),
    OuterProduct = 147
    RequiresOneOf([Matrix]),
    Dot = 148,
    IAddCarry = 149,
    ISubBorrow = 150,
    UMulExtended = 151,
    SMulExtended = 152,
    Any = 154,
    All = 155,
    IsNan = 156,
    IsInf = 157,
    IsFinite = 158
    RequiresOneOf([Kernel]),
    IsNormal = 159
    RequiresOneOf([Kernel]),
    SignBitSet = 160
    RequiresOneOf([Kernel]),
    LessOrGreater = 161
    RequiresOneOf([Kernel]),
    Ordered = 162
    RequiresOneOf([Kernel]),
    Unordered = 163
    RequiresOneOf([Kernel]),
    LogicalEqual = 164,
    LogicalNotEqual = 165,
    LogicalOr = 166,
    LogicalAnd = 167,
    LogicalNot = 168,
    Select = 169,
    IEqual = 170,
    INotEqual = 171,
    UGreaterThan = 172,
    SGreaterThan = 173,
    UGreaterThanEqual = 174,
    SGreaterThanEqual = 175,
    ULessThan = 176,
    SLessThan = 177,
    ULessThanEqual = 178,
    SLessThanEqual = 179,
    FOrdEqual = 180,
    FUnordEqual = 181,
    FOrdNotEqual = 182,
    FUnordNotEqual = 183,
    FOrdLessThan = 184,
    FUnordLessThan = 185,
    FOrdGreaterThan = 186,
    FUnordGreaterThan = 187,
    FOrdLessThanEqual = 188,
    FUnordLessThanEqual = 189,
    FOrdGreaterThanEqual = 190,
    FUnordGreaterThanEqual = 191,
    ShiftRightLogical = 194,
    ShiftRightArithmetic = 195,
    ShiftLeftLogical = 196,
    BitwiseOr = 197,
    BitwiseXor = 198,
    BitwiseAnd = 199,
    Not = 200,
    BitFieldInsert = 201
    RequiresOneOf([Shader]),
    BitFieldSExtract = 202
    RequiresOneOf([Shader]),
    BitFieldUExtract = 203
    RequiresOneOf([Shader]),
    BitReverse = 204
    RequiresOneOf([Shader]),
    BitCount = 205,
    DPdx = 207
    RequiresOneOf([Shader]),
    DPdy = 208
    RequiresOneOf([Shader]),
    Fwidth = 209
    RequiresOneOf([Shader]),
    DPdxFine = 210
    RequiresOneOf([DerivativeControl]),
    DPdyFine = 211
    RequiresOneOf([DerivativeControl]),
    FwidthFine = 212
    RequiresOneOf([DerivativeControl]),
    DPdxCoarse = 213
    RequiresOneOf([DerivativeControl]),
    DPdyCoarse = 214
    RequiresOneOf([DerivativeControl]),
    FwidthCoarse = 215
    RequiresOneOf([DerivativeControl]),
    EmitVertex = 218
    RequiresOneOf([Geometry]),
    EndPrimitive = 219
    RequiresOneOf([Geometry]),
    EmitStreamVertex = 220
    RequiresOneOf([GeometryStreams]),
    EndStreamPrimitive = 221
    RequiresOneOf([GeometryStreams]),
    ControlBarrier = 224,
    MemoryBarrier = 225,
    AtomicLoad = 227,
    AtomicStore = 228,
    AtomicExchange = 229,
    AtomicCompareExchange = 230,
    AtomicCompareExchangeWeak = 231
    RequiresOneOf([Kernel]),
    AtomicIIncrement = 232,
    AtomicIDecrement = 233,
    AtomicIAdd = 234,
    AtomicISub = 235,
    AtomicSMin = 236,
    AtomicUMin = 237,
    AtomicSMax = 238,
    AtomicUMax = 239,
    AtomicAnd = 240,
    AtomicOr = 241,
    AtomicXor = 242,
    Phi = 245,
    LoopMerge = 246,
    SelectionMerge = 247,
    Label = 248,
    Branch = 249,
    BranchConditional = 250,
    Switch = 251,
    Kill = 252
    RequiresOneOf([Shader]),
    Return = 253,
    ReturnValue = 254,
    Unreachable = 255,
    LifetimeStart = 256
    RequiresOneOf([Kernel]),
    LifetimeStop = 257
    RequiresOneOf([Kernel]),
    GroupAsyncCopy = 259
    RequiresOneOf([Kernel]),
    GroupWaitEvents = 260
    RequiresOneOf([Kernel]),
    GroupAll = 261
    RequiresOneOf([Groups]),
    GroupAny = 262
    RequiresOneOf([Groups]),
    GroupBroadcast = 263
    RequiresOneOf([Groups]),
    GroupIAdd = 264
    RequiresOneOf([Groups]),
    GroupFAdd = 265
    RequiresOneOf([Groups]),
    GroupFMin = 266
    RequiresOneOf([Groups]),
    GroupUMin = 267
    RequiresOneOf([Groups]),
    GroupSMin = 268
    RequiresOneOf([Groups]),
    GroupFMax = 269
    RequiresOneOf([Groups]),
    GroupUMax = 270
    RequiresOneOf([Groups]),
    GroupSMax = 271
    RequiresOneOf([Groups]),
    ReadPipe = 274
    RequiresOneOf([Pipes]),
    WritePipe = 275
    RequiresOneOf([Pipes]),
    ReservedReadPipe = 276
    RequiresOneOf([Pipes]),
    ReservedWritePipe = 277
    RequiresOneOf([Pipes]),
    ReserveReadPipePackets = 278
    RequiresOneOf([Pipes]),
    ReserveWritePipePackets = 279
    RequiresOneOf([Pipes]),
    CommitReadPipe = 280
    RequiresOneOf([Pipes]),
    CommitWritePipe = 281
    RequiresOneOf([Pipes]),
    IsValidReserveId = 282
    RequiresOneOf([Pipes]),
    GetNumPipePackets = 283
    RequiresOneOf([Pipes]),
    GetMaxPipePackets = 284
    RequiresOneOf([Pipes]),
    GroupReserveReadPipePackets = 285
    RequiresOneOf([Pipes]),
    GroupReserveWritePipePackets = 286
    RequiresOneOf([Pipes]),
    GroupCommitReadPipe = 287
    RequiresOneOf([Pipes]),
    GroupCommitWritePipe = 288
    RequiresOneOf([Pipes]),
    EnqueueMarker = 291
    RequiresOneOf([DeviceEnqueue]),
    EnqueueKernel = 292
    RequiresOneOf([DeviceEnqueue]),
    GetKernelNDrangeSubGroupCount = 293
    RequiresOneOf([DeviceEnqueue]),
    GetKernelNDrangeMaxSubGroupSize = 294
    RequiresOneOf([DeviceEnqueue]),
    GetKernelWorkGroupSize = 295
    RequiresOneOf([DeviceEnqueue]),
    GetKernelPreferredWorkGroupSizeMultiple = 296
    RequiresOneOf([DeviceEnqueue]),
    RetainEvent = 297
    RequiresOneOf([DeviceEnqueue]),
    ReleaseEvent = 298
    RequiresOneOf([DeviceEnqueue]),
    CreateUserEvent = 299
    RequiresOneOf([DeviceEnqueue]),
    IsValidEvent = 300
    RequiresOneOf([DeviceEnqueue]),
    SetUserEventStatus = 301
    RequiresOneOf([DeviceEnqueue]),
    CaptureEventProfilingInfo = 302
    RequiresOneOf([DeviceEnqueue]),
    GetDefaultQueue = 303
    RequiresOneOf([DeviceEnqueue]),
    BuildNDRange = 304
    RequiresOneOf([DeviceEnqueue]),
    ImageSparseSampleImplicitLod = 305
    RequiresOneOf([SparseResidency]),
    ImageSparseSampleExplicitLod = 306
    RequiresOneOf([SparseResidency]),
    ImageSparseSampleDrefImplicitLod = 307
    RequiresOneOf([SparseResidency]),
    ImageSparseSampleDrefExplicitLod = 308
    RequiresOneOf([SparseResidency]),
    ImageSparseSampleProjImplicitLod = 309
    RequiresOneOf([SparseResidency]),
    ImageSparseSampleProjExplicitLod = 310
    RequiresOneOf([SparseResidency]),
    ImageSparseSampleProjDrefImplicitLod = 311
    RequiresOneOf([SparseResidency]),
    ImageSparseSampleProjDrefExplicitLod = 312
    RequiresOneOf([SparseResidency]),
    ImageSparseFetch = 313
    RequiresOneOf([SparseResidency]),
    ImageSparseGather = 314
    RequiresOneOf([SparseResidency]),
    ImageSparseDrefGather = 315
    RequiresOneOf([SparseResidency]),
    ImageSparseTexelsResident = 316
    RequiresOneOf([SparseResidency]),
    NoLine = 317,
    AtomicFlagTestAndSet = 318
    RequiresOneOf([Kernel]),
    AtomicFlagClear = 319
    RequiresOneOf([Kernel]),
    ImageSparseRead = 320
    RequiresOneOf([SparseResidency]),

    // SPIR-V 1.1
    SizeOf = 321
    RequiresOneOf([Addresses]),
    TypePipeStorage = 322
    RequiresOneOf([PipeStorage]),
    ConstantPipeStorage = 323
    RequiresOneOf([PipeStorage]),
    CreatePipeFromPipeStorage = 324
    RequiresOneOf([PipeStorage]),
    GetKernelLocalSizeForSubgroupCount = 325
    RequiresOneOf([SubgroupDispatch]),
    GetKernelMaxNumSubgroups = 326
    RequiresOneOf([SubgroupDispatch]),
    TypeNamedBarrier = 327
    RequiresOneOf([NamedBarrier]),
    NamedBarrierInitialize = 328
    RequiresOneOf([NamedBarrier]),
    MemoryNamedBarrier = 329
    RequiresOneOf([NamedBarrier]),
    ModuleProcessed = 330,

    // SPIR-V 1.2
    ExecutionModeId = 331,
    DecorateId = 332,

    // SPV_KHR_shader_ballot, SPV_KHR_subgroup_vote
    SubgroupBallotKHR = 4421
    RequiresOneOf([SubgroupBallotKHR]),
    SubgroupFirstInvocationKHR = 4422
    RequiresOneOf([SubgroupBallotKHR]),
    SubgroupAllKHR = 4428
    RequiresOneOf([SubgroupVoteKHR]),
    SubgroupAnyKHR = 4429
    RequiresOneOf([SubgroupVoteKHR]),
    SubgroupAllEqualKHR = 4430
    RequiresOneOf([SubgroupVoteKHR]),
    SubgroupReadInvocationKHR = 4432
    RequiresOneOf([SubgroupBallotKHR]),

    /// Also usable with only `SPV_AMD_shader_ballot` declared, which implies `Groups`.
    GroupIAddNonUniformAMD = 5000
    RequiresOneOf([Groups]),
    GroupFAddNonUniformAMD = 5001
    RequiresOneOf([Groups]),
    GroupFMinNonUniformAMD = 5002
    RequiresOneOf([Groups]),
    GroupUMinNonUniformAMD = 5003
    RequiresOneOf([Groups]),
    GroupSMinNonUniformAMD = 5004
    RequiresOneOf([Groups]),
    GroupFMaxNonUniformAMD = 5005
    RequiresOneOf([Groups]),
    GroupUMaxNonUniformAMD = 5006
    RequiresOneOf([Groups]),
    GroupSMaxNonUniformAMD = 5007
    RequiresOneOf([Groups]),

    FragmentMaskFetchAMD = 5011
    RequiresOneOf([FragmentMaskAMD]),
    FragmentFetchAMD = 5012
    RequiresOneOf([FragmentMaskAMD]),
}
#[cfg(test)]
mod tests {
    use super::Op;
    use crate::spirv::Capability;

    #[test]
    fn amd_shader_ballot_group_operations_require_groups() {
        for op in [
            Op::GroupIAddNonUniformAMD,
            Op::GroupFAddNonUniformAMD,
            Op::GroupFMinNonUniformAMD,
            Op::GroupUMinNonUniformAMD,
            Op::GroupSMinNonUniformAMD,
            Op::GroupFMaxNonUniformAMD,
            Op::GroupUMaxNonUniformAMD,
            Op::GroupSMaxNonUniformAMD,
        ] {
            assert_eq!(op.requires_one_of(), &[Capability::Groups], "{op}");
        }
    }

    #[test]
    fn declarations_are_unconstrained() {
        assert!(Op::Capability.requires_one_of().is_empty());
        assert!(Op::Extension.requires_one_of().is_empty());
        assert!(Op::MemoryModel.requires_one_of().is_empty());
    }

    #[test]
    fn alternatives_are_listed_in_grammar_order() {
        assert_eq!(
            Op::PtrAccessChain.requires_one_of(),
            &[
                Capability::Addresses,
                Capability::VariablePointers,
                Capability::VariablePointersStorageBuffer,
            ],
        );
        assert_eq!(
            Op::ImageQuerySize.requires_one_of(),
            &[Capability::Kernel, Capability::ImageQuery],
        );
    }

    #[test]
    fn mnemonics_and_values() {
        assert_eq!(Op::GroupIAddNonUniformAMD.name(), "GroupIAddNonUniformAMD");
        assert_eq!(u32::from(Op::GroupIAddNonUniformAMD), 5000);
        assert_eq!(Op::try_from(17u32), Ok(Op::Capability));
        assert_eq!(Op::try_from(9u32), Err(()));
        assert_eq!(Op::from_name("OpCapability"), None);

        for &op in Op::ALL {
            assert_eq!(Op::try_from(u32::from(op)), Ok(op));
            assert_eq!(Op::from_name(op.name()), Some(op));
        }
    }
}
