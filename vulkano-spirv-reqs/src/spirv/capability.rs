use super::Extension;
use crate::macros::spirv_enum;

spirv_enum! {
    /// A SPIR-V capability that a module can declare with `OpCapability`.
    ///
    /// Core SPIR-V capabilities are always available. Capabilities added by an
    /// extension can only be declared if one of their enabling extensions is declared too.
    Capability(u32) requires Extension;

    Matrix = 0,
    Shader = 1,
    Geometry = 2,
    Tessellation = 3,
    Addresses = 4,
    Linkage = 5,
    Kernel = 6,
    Vector16 = 7,
    Float16Buffer = 8,
    Float16 = 9,
    Float64 = 10,
    Int64 = 11,
    Int64Atomics = 12,
    ImageBasic = 13,
    ImageReadWrite = 14,
    ImageMipmap = 15,
    Pipes = 17,
    Groups = 18,
    DeviceEnqueue = 19,
    LiteralSampler = 20,
    AtomicStorage = 21,
    Int16 = 22,
    TessellationPointSize = 23,
    GeometryPointSize = 24,
    ImageGatherExtended = 25,
    StorageImageMultisample = 27,
    UniformBufferArrayDynamicIndexing = 28,
    SampledImageArrayDynamicIndexing = 29,
    StorageBufferArrayDynamicIndexing = 30,
    StorageImageArrayDynamicIndexing = 31,
    ClipDistance = 32,
    CullDistance = 33,
    ImageCubeArray = 34,
    SampleRateShading = 35,
    ImageRect = 36,
    SampledRect = 37,
    GenericPointer = 38,
    Int8 = 39,
    InputAttachment = 40,
    SparseResidency = 41,
    MinLod = 42,
    Sampled1D = 43,
    Image1D = 44,
    SampledCubeArray = 45,
    SampledBuffer = 46,
    ImageBuffer = 47,
    ImageMSArray = 48,
    StorageImageExtendedFormats = 49,
    ImageQuery = 50,
    DerivativeControl = 51,
    InterpolationFunction = 52,
    TransformFeedback = 53,
    GeometryStreams = 54,
    StorageImageReadWithoutFormat = 55,
    StorageImageWriteWithoutFormat = 56,
    MultiViewport = 57,

    // SPIR-V 1.1
    SubgroupDispatch = 58,
    NamedBarrier = 59,
    PipeStorage = 60,

    SubgroupBallotKHR = 4423
    RequiresOneOf([KhrShaderBallot]),
    DrawParameters = 4427
    RequiresOneOf([KhrShaderDrawParameters]),
    SubgroupVoteKHR = 4431
    RequiresOneOf([KhrSubgroupVote]),

    /// Also known as `StorageUniformBufferBlock16`.
    StorageBuffer16BitAccess = 4433
    RequiresOneOf([Khr16bitStorage]),

    /// Also known as `StorageUniform16`.
    UniformAndStorageBuffer16BitAccess = 4434
    RequiresOneOf([Khr16bitStorage]),
    StoragePushConstant16 = 4435
    RequiresOneOf([Khr16bitStorage]),
    StorageInputOutput16 = 4436
    RequiresOneOf([Khr16bitStorage]),
    DeviceGroup = 4437
    RequiresOneOf([KhrDeviceGroup]),
    MultiView = 4439
    RequiresOneOf([KhrMultiview]),
    VariablePointersStorageBuffer = 4441
    RequiresOneOf([KhrVariablePointers]),
    VariablePointers = 4442
    RequiresOneOf([KhrVariablePointers]),
    AtomicStorageOps = 4445
    RequiresOneOf([KhrShaderAtomicCounterOps]),
    SampleMaskPostDepthCoverage = 4447
    RequiresOneOf([KhrPostDepthCoverage]),
    ImageGatherBiasLodAMD = 5009
    RequiresOneOf([AmdTextureGatherBiasLod]),
    FragmentMaskAMD = 5010
    RequiresOneOf([AmdShaderFragmentMask]),
    StencilExportEXT = 5013
    RequiresOneOf([ExtShaderStencilExport]),
    ImageReadWriteLodAMD = 5015
    RequiresOneOf([AmdShaderImageLoadStoreLod]),
    SampleMaskOverrideCoverageNV = 5249
    RequiresOneOf([NvSampleMaskOverrideCoverage]),
    GeometryShaderPassthroughNV = 5251
    RequiresOneOf([NvGeometryShaderPassthrough]),

    /// Also known as `ShaderViewportIndexLayerNV`.
    ShaderViewportIndexLayerEXT = 5254
    RequiresOneOf([ExtShaderViewportIndexLayer, NvViewportArray2]),
    ShaderViewportMaskNV = 5255
    RequiresOneOf([NvViewportArray2]),
    ShaderStereoViewNV = 5259
    RequiresOneOf([NvStereoViewRendering]),
    PerViewAttributesNV = 5260
    RequiresOneOf([NvxMultiviewPerViewAttributes]),
}

impl Capability {
    /// Returns the capabilities that are implicitly declared when `self` is declared.
    ///
    /// Only the direct dependencies are returned; callers that need the full closure must
    /// follow the returned capabilities in turn.
    pub const fn implicitly_declares(self) -> &'static [Capability] {
        match self {
            Self::Shader => &[Self::Matrix],
            Self::Geometry
            | Self::Tessellation
            | Self::AtomicStorage
            | Self::ImageGatherExtended
            | Self::StorageImageMultisample
            | Self::UniformBufferArrayDynamicIndexing
            | Self::SampledImageArrayDynamicIndexing
            | Self::StorageBufferArrayDynamicIndexing
            | Self::StorageImageArrayDynamicIndexing
            | Self::ClipDistance
            | Self::CullDistance
            | Self::SampleRateShading
            | Self::SampledRect
            | Self::InputAttachment
            | Self::SparseResidency
            | Self::MinLod
            | Self::SampledCubeArray
            | Self::ImageMSArray
            | Self::StorageImageExtendedFormats
            | Self::ImageQuery
            | Self::DerivativeControl
            | Self::InterpolationFunction
            | Self::TransformFeedback
            | Self::StorageImageReadWithoutFormat
            | Self::StorageImageWriteWithoutFormat
            | Self::DrawParameters
            | Self::MultiView
            | Self::VariablePointersStorageBuffer
            | Self::ImageGatherBiasLodAMD
            | Self::FragmentMaskAMD
            | Self::StencilExportEXT
            | Self::ImageReadWriteLodAMD => &[Self::Shader],
            Self::Vector16
            | Self::Float16Buffer
            | Self::ImageBasic
            | Self::Pipes
            | Self::DeviceEnqueue
            | Self::LiteralSampler
            | Self::NamedBarrier => &[Self::Kernel],
            Self::Int64Atomics => &[Self::Int64],
            Self::ImageReadWrite | Self::ImageMipmap => &[Self::ImageBasic],
            Self::TessellationPointSize => &[Self::Tessellation],
            Self::GeometryPointSize
            | Self::GeometryStreams
            | Self::MultiViewport
            | Self::GeometryShaderPassthroughNV => &[Self::Geometry],
            Self::ImageCubeArray => &[Self::SampledCubeArray],
            Self::ImageRect => &[Self::SampledRect],
            Self::GenericPointer => &[Self::Addresses],
            Self::Image1D => &[Self::Sampled1D],
            Self::ImageBuffer => &[Self::SampledBuffer],
            Self::SubgroupDispatch => &[Self::DeviceEnqueue],
            Self::PipeStorage => &[Self::Pipes],
            Self::UniformAndStorageBuffer16BitAccess => &[Self::StorageBuffer16BitAccess],
            Self::VariablePointers => &[Self::VariablePointersStorageBuffer],
            Self::SampleMaskOverrideCoverageNV => &[Self::SampleRateShading],
            Self::ShaderViewportIndexLayerEXT => &[Self::MultiViewport],
            Self::ShaderViewportMaskNV => &[Self::ShaderViewportIndexLayerEXT],
            Self::ShaderStereoViewNV => &[Self::ShaderViewportMaskNV],
            Self::PerViewAttributesNV => &[Self::MultiView],
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Capability;
    use crate::spirv::Extension;

    #[test]
    fn core_capabilities_need_no_extension() {
        for capability in [
            Capability::Matrix,
            Capability::Shader,
            Capability::Linkage,
            Capability::Kernel,
            Capability::Groups,
            Capability::PipeStorage,
        ] {
            assert!(capability.requires_one_of().is_empty(), "{capability}");
        }
    }

    #[test]
    fn extension_capabilities() {
        assert_eq!(
            Capability::DeviceGroup.requires_one_of(),
            &[Extension::KhrDeviceGroup],
        );
        assert_eq!(
            Capability::ShaderViewportIndexLayerEXT.requires_one_of(),
            &[
                Extension::ExtShaderViewportIndexLayer,
                Extension::NvViewportArray2,
            ],
        );
    }

    #[test]
    fn every_capability_above_core_requires_an_extension() {
        for &capability in Capability::ALL {
            if u32::from(capability) > 60 {
                assert!(!capability.requires_one_of().is_empty(), "{capability}");
            }
        }
    }

    #[test]
    fn numeric_values() {
        assert_eq!(u32::from(Capability::DeviceGroup), 4437);
        assert_eq!(Capability::try_from(18u32), Ok(Capability::Groups));
        assert_eq!(Capability::try_from(16u32), Err(()));
        assert_eq!(Capability::try_from(4438u32), Err(()));
    }

    #[test]
    fn names() {
        assert_eq!(Capability::Groups.name(), "Groups");
        assert_eq!(Capability::from_name("DeviceGroup"), Some(Capability::DeviceGroup));
        assert_eq!(Capability::from_name("devicegroup"), None);

        for &capability in Capability::ALL {
            assert_eq!(Capability::from_name(capability.name()), Some(capability));
        }
    }

    #[test]
    fn implicit_declarations_stay_within_the_dependency_order() {
        assert_eq!(Capability::Shader.implicitly_declares(), &[Capability::Matrix]);
        assert_eq!(Capability::Geometry.implicitly_declares(), &[Capability::Shader]);
        assert!(Capability::Matrix.implicitly_declares().is_empty());

        for &capability in Capability::ALL {
            assert!(!capability.implicitly_declares().contains(&capability));
        }
    }
}
