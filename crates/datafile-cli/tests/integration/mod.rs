mod descriptor_workflow;
