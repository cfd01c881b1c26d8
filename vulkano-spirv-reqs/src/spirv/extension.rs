use crate::macros::spirv_extensions;

spirv_extensions! {
    /// A SPIR-V extension that a module can declare with `OpExtension`.
    ///
    /// The set is closed: names that are not listed here are reported as unrecognized but do not
    /// make a module invalid.
    Extension;

    AmdShaderExplicitVertexParameter = "SPV_AMD_shader_explicit_vertex_parameter",
    AmdShaderTrinaryMinmax = "SPV_AMD_shader_trinary_minmax",
    AmdGcnShader = "SPV_AMD_gcn_shader",
    KhrShaderBallot = "SPV_KHR_shader_ballot",

    /// The group reduce and scan operations of this extension are usable without declaring the
    /// `Groups` capability.
    AmdShaderBallot = "SPV_AMD_shader_ballot"
    Implies([Groups]),

    AmdGpuShaderHalfFloat = "SPV_AMD_gpu_shader_half_float",
    KhrShaderDrawParameters = "SPV_KHR_shader_draw_parameters",
    KhrSubgroupVote = "SPV_KHR_subgroup_vote",
    Khr16bitStorage = "SPV_KHR_16bit_storage",
    KhrDeviceGroup = "SPV_KHR_device_group",
    KhrMultiview = "SPV_KHR_multiview",
    NvxMultiviewPerViewAttributes = "SPV_NVX_multiview_per_view_attributes",
    NvViewportArray2 = "SPV_NV_viewport_array2",
    NvStereoViewRendering = "SPV_NV_stereo_view_rendering",
    NvSampleMaskOverrideCoverage = "SPV_NV_sample_mask_override_coverage",
    NvGeometryShaderPassthrough = "SPV_NV_geometry_shader_passthrough",
    AmdTextureGatherBiasLod = "SPV_AMD_texture_gather_bias_lod",
    KhrStorageBufferStorageClass = "SPV_KHR_storage_buffer_storage_class",
    KhrVariablePointers = "SPV_KHR_variable_pointers",
    AmdGpuShaderInt16 = "SPV_AMD_gpu_shader_int16",
    KhrPostDepthCoverage = "SPV_KHR_post_depth_coverage",
    KhrShaderAtomicCounterOps = "SPV_KHR_shader_atomic_counter_ops",
    ExtShaderStencilExport = "SPV_EXT_shader_stencil_export",
    ExtShaderViewportIndexLayer = "SPV_EXT_shader_viewport_index_layer",
    AmdShaderImageLoadStoreLod = "SPV_AMD_shader_image_load_store_lod",
    AmdShaderFragmentMask = "SPV_AMD_shader_fragment_mask",
}

#[cfg(test)]
mod tests {
    use super::Extension;
    use crate::spirv::Capability;
    use foldhash::HashSet;

    #[test]
    fn names_round_trip() {
        for &extension in Extension::ALL {
            assert_eq!(Extension::from_name(extension.name()), Some(extension));
        }
    }

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = Extension::ALL.iter().map(|ext| ext.name()).collect();
        assert_eq!(names.len(), Extension::ALL.len());
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(
            Extension::from_name("SPV_KHR_shader_ballot"),
            Some(Extension::KhrShaderBallot),
        );
        assert_eq!(Extension::from_name("SPV_KHR_"), None);
        assert_eq!(Extension::from_name("SPV_KHR_shader_ballot_ERROR"), None);
        assert_eq!(Extension::from_name("spv_khr_shader_ballot"), None);
        assert_eq!(Extension::from_name(" SPV_KHR_shader_ballot"), None);
        assert_eq!(Extension::from_name(""), None);
    }

    #[test]
    fn implied_capabilities() {
        assert_eq!(
            Extension::AmdShaderBallot.implied_capabilities(),
            &[Capability::Groups],
        );
        assert!(Extension::KhrShaderBallot.implied_capabilities().is_empty());
        assert!(Extension::KhrDeviceGroup.implied_capabilities().is_empty());
    }

    #[test]
    fn display_is_canonical_name() {
        assert_eq!(
            Extension::KhrDeviceGroup.to_string(),
            "SPV_KHR_device_group",
        );
    }
}
