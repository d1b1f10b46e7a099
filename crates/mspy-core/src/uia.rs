use crate::error::{Error, Result};
use crate::parser::Configuration;
use crate::taskbar::{read_current_mode, UiTree};
use crate::types::ControlType;
use std::marker::PhantomData;
use tracing::debug;
use windows::core::{BSTR, VARIANT};
use windows::Win32::System::Com::{
    CoCreateInstance, CoInitializeEx, CoUninitialize, CLSCTX_INPROC_SERVER,
    COINIT_APARTMENTTHREADED,
};
use windows::Win32::UI::Accessibility::{
    CUIAutomation8, IUIAutomation, IUIAutomationElement, TreeScope_Children,
    TreeScope_Descendants, UIA_ControlTypePropertyId, UIA_NamePropertyId,
};

/// COM apartment on the current thread. Uninitialized when dropped, after
/// every automation object borrowed from it is gone.
pub struct Session {
    // CoUninitialize must run on the thread that initialized.
    _not_send: PhantomData<*const ()>,
}

impl Session {
    pub fn open() -> Result<Self> {
        unsafe { CoInitializeEx(None, COINIT_APARTMENTTHREADED) }
            .ok()
            .map_err(|e| Error::SessionInit(e.to_string()))?;
        debug!("COM session opened");
        Ok(Self {
            _not_send: PhantomData,
        })
    }

    pub fn automation(&self) -> Result<UiaTree<'_>> {
        let automation: IUIAutomation =
            unsafe { CoCreateInstance(&CUIAutomation8, None, CLSCTX_INPROC_SERVER) }
                .map_err(|e| Error::SessionInit(e.to_string()))?;
        Ok(UiaTree {
            automation,
            _session: PhantomData,
        })
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        unsafe { CoUninitialize() };
        debug!("COM session closed");
    }
}

/// UI Automation backed tree. COM references are released when the
/// wrappers drop.
pub struct UiaTree<'s> {
    automation: IUIAutomation,
    _session: PhantomData<&'s Session>,
}

fn provider_error(e: windows::core::Error) -> Error {
    Error::Provider(e.to_string())
}

impl UiTree for UiaTree<'_> {
    type Element = IUIAutomationElement;

    fn root(&self) -> Result<IUIAutomationElement> {
        unsafe { self.automation.GetRootElement() }.map_err(provider_error)
    }

    fn find_child_by_name(
        &self,
        parent: &IUIAutomationElement,
        name: &str,
    ) -> Result<Option<IUIAutomationElement>> {
        let condition = unsafe {
            self.automation
                .CreatePropertyCondition(UIA_NamePropertyId, &VARIANT::from(BSTR::from(name)))
        }
        .map_err(provider_error)?;

        match unsafe { parent.FindFirst(TreeScope_Children, &condition) } {
            Ok(element) => Ok(Some(element)),
            // No match comes back as a successful call with a null element.
            Err(e) if e.code().is_ok() => Ok(None),
            Err(e) => Err(provider_error(e)),
        }
    }

    fn find_descendants_by_type(
        &self,
        scope: &IUIAutomationElement,
        control_type: ControlType,
    ) -> Result<Vec<IUIAutomationElement>> {
        let condition = unsafe {
            self.automation.CreatePropertyCondition(
                UIA_ControlTypePropertyId,
                &VARIANT::from(control_type.id()),
            )
        }
        .map_err(provider_error)?;

        let array = unsafe { scope.FindAll(TreeScope_Descendants, &condition) }
            .map_err(provider_error)?;
        let len = unsafe { array.Length() }.map_err(provider_error)?;

        let mut elements = Vec::with_capacity(usize::try_from(len).unwrap_or_default());
        for i in 0..len {
            match unsafe { array.GetElement(i) } {
                Ok(element) => elements.push(element),
                Err(e) => debug!("Skipping element {} of {}: {}", i, len, e),
            }
        }
        Ok(elements)
    }

    fn read_name(&self, element: &IUIAutomationElement) -> String {
        unsafe { element.CurrentName() }
            .map(|name| name.to_string())
            .unwrap_or_default()
    }
}

/// Open a session, read the indicator, and close the session again.
pub fn read_desktop_mode(config: &Configuration) -> Result<String> {
    let session = Session::open()?;
    let tree = session.automation()?;
    read_current_mode(config, &tree)
}
